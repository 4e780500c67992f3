//! Single-paper tools: arxiv_get_paper_details, arxiv_get_paper_summary, arxiv_get_paper_citations.

use serde_json::json;

use super::{McpTool, ToolContext, paper_id_schema};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{CitationInput, Paper, PaperIdInput};

/// Fetch one paper or fail with the user-facing "not found" message.
async fn fetch_paper(ctx: &ToolContext, paper_id: &str) -> ToolResult<Paper> {
    ctx.client
        .get_paper(paper_id)
        .await
        .map_err(ToolError::from)?
        .ok_or_else(|| ToolError::not_found(format!("No paper found with ID: {paper_id}")))
}

/// Full metadata and abstract.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "arxiv_get_paper_details"
    }

    fn description(&self) -> &'static str {
        "The deep-dive reading tool. Takes a specific paper_id and returns the full, unabridged \
         metadata, the complete abstract, all categories, and the publication date. Use this \
         *after* discovering a paper ID via search."
    }

    fn input_schema(&self) -> serde_json::Value {
        paper_id_schema("The standard arXiv identifier (e.g., \"1706.03762\").")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;
        params.validate()?;

        let paper = fetch_paper(ctx, params.paper_id.trim()).await?;
        Ok(formatters::format_paper_details(&paper))
    }
}

/// Abstract wrapped in a summarization prompt.
pub struct PaperSummaryTool;

#[async_trait::async_trait]
impl McpTool for PaperSummaryTool {
    fn name(&self) -> &'static str {
        "arxiv_get_paper_summary"
    }

    fn description(&self) -> &'static str {
        "Analytical summarization tool. Given a paper_id, fetches the paper and asks for its core \
         thesis, methodology, results, and limitations to be distilled into a dense bulleted \
         summary."
    }

    fn input_schema(&self) -> serde_json::Value {
        paper_id_schema("The standard arXiv identifier (e.g., \"1706.03762\").")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;
        params.validate()?;

        let paper = fetch_paper(ctx, params.paper_id.trim()).await?;
        Ok(formatters::format_summary_prompt(&paper))
    }
}

/// Citation generation.
pub struct PaperCitationsTool;

#[async_trait::async_trait]
impl McpTool for PaperCitationsTool {
    fn name(&self) -> &'static str {
        "arxiv_get_paper_citations"
    }

    fn description(&self) -> &'static str {
        "Citation generation tool. Takes a paper_id and an optional format (BibTeX, APA, MLA) and \
         returns the formatted citation. Use this when finalizing a research report or \
         bibliography."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "The standard arXiv identifier (e.g., \"1706.03762\")."
                },
                "format": {
                    "type": "string",
                    "description": "The citation format. Must be 'bibtex', 'apa', or 'mla'. Defaults to 'bibtex'.",
                    "enum": ["bibtex", "apa", "mla"],
                    "default": "bibtex"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationInput = serde_json::from_value(input)?;
        params.validate()?;

        let paper = fetch_paper(ctx, params.paper_id.trim()).await?;
        Ok(formatters::format_citation(&paper, params.format))
    }
}
