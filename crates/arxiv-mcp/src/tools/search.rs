//! Search tools: arxiv_search, arxiv_search_trending_papers, arxiv_search_related_papers.

use serde_json::json;

use super::{McpTool, ToolContext, paper_id_schema};
use crate::config::api;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{CategoryInput, PaperIdInput, SearchInput, SortBy};

/// Keyword search tool.
pub struct SearchTool;

#[async_trait::async_trait]
impl McpTool for SearchTool {
    fn name(&self) -> &'static str {
        "arxiv_search"
    }

    fn description(&self) -> &'static str {
        "The primary discovery tool for arXiv. Use this to search for papers by keywords, \
         authors, or categories. It returns a concise, token-optimized list of results (IDs, \
         titles, and primary authors) designed for scanning. Do NOT use this tool if you need \
         the full abstract; use this to find relevant paper_ids first."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query (e.g., \"electron\", \"au:einstein\", \"cat:cs.AI\")."
                },
                "max_results": {
                    "type": "number",
                    "description": "Maximum number of results to return (default: 10, max: 50). Fractions are truncated.",
                    "minimum": 1,
                    "default": api::DEFAULT_MAX_RESULTS
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let mut params: SearchInput = serde_json::from_value(input)?;
        params.validate()?;

        let papers = ctx
            .client
            .search(params.query.trim(), params.max_results, SortBy::Relevance)
            .await
            .map_err(ToolError::from)?;

        if papers.is_empty() {
            return Ok("No papers found matching the query.".to_string());
        }

        Ok(formatters::format_concise_results(&papers))
    }
}

/// Latest papers in a category.
pub struct TrendingPapersTool;

#[async_trait::async_trait]
impl McpTool for TrendingPapersTool {
    fn name(&self) -> &'static str {
        "arxiv_search_trending_papers"
    }

    fn description(&self) -> &'static str {
        "Proactive discovery tool. Retrieves the most recent papers across a specific domain \
         (like Artificial Intelligence or Quantum Physics) without needing a specific keyword \
         query. Perfect for \"What's new today?\" or broad literature reviews."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "The arXiv category to search in (e.g., \"cs.AI\", \"physics.gen-ph\")."
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CategoryInput = serde_json::from_value(input)?;
        params.validate()?;
        let category = params.category.trim();

        let papers = ctx
            .client
            .search_category(category, api::LISTING_RESULTS, SortBy::SubmittedDate)
            .await
            .map_err(ToolError::from)?;

        if papers.is_empty() {
            return Ok(format!("No trending papers found for category {category}."));
        }

        Ok(formatters::format_concise_results(&papers))
    }
}

/// Papers sharing the seed paper's primary category.
pub struct RelatedPapersTool;

#[async_trait::async_trait]
impl McpTool for RelatedPapersTool {
    fn name(&self) -> &'static str {
        "arxiv_search_related_papers"
    }

    fn description(&self) -> &'static str {
        "Given a paper_id, finds similar literature in the seed paper's primary category. \
         Use this to follow the \"rabbit hole\" workflow when a user wants more papers like a \
         specific foundational work."
    }

    fn input_schema(&self) -> serde_json::Value {
        paper_id_schema("The standard arXiv identifier of the seed paper (e.g., \"1706.03762\").")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;
        params.validate()?;
        let paper_id = params.paper_id.trim();

        let source = ctx
            .client
            .get_paper(paper_id)
            .await
            .map_err(ToolError::from)?
            .ok_or_else(|| {
                ToolError::not_found(format!("No source paper found with ID: {paper_id}"))
            })?;

        let category = source.primary_category().ok_or_else(|| {
            ToolError::not_found(format!(
                "Source paper {paper_id} has no assigned categories to map relates."
            ))
        })?;

        tracing::debug!(paper_id, category, "Searching related papers");

        let related: Vec<_> = ctx
            .client
            .search_category(category, api::LISTING_RESULTS, SortBy::Relevance)
            .await
            .map_err(ToolError::from)?
            .into_iter()
            .filter(|p| !p.matches_id(paper_id))
            .collect();

        if related.is_empty() {
            return Ok("No related papers found.".to_string());
        }

        Ok(formatters::format_concise_results(&related))
    }
}
