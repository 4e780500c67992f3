//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates its input parameters
//! 2. Calls the arXiv client (every query passes the shared rate limiter)
//! 3. Formats the resulting papers as text for the agent

mod download;
mod papers;
mod search;

pub use download::*;
pub use papers::*;
pub use search::*;

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ArxivClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ArxivClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "arxiv_search").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Search tools (3)
        Box::new(search::SearchTool),
        Box::new(search::TrendingPapersTool),
        Box::new(search::RelatedPapersTool),
        // Paper tools (3)
        Box::new(papers::PaperDetailsTool),
        Box::new(papers::PaperSummaryTool),
        Box::new(papers::PaperCitationsTool),
        // Download tools (1)
        Box::new(download::DownloadPaperTool),
    ]
}

/// Schema fragment shared by the tools keyed on a single paper.
fn paper_id_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "paper_id": {
                "type": "string",
                "description": description
            }
        },
        "required": ["paper_id"]
    })
}
