//! Download tools: arxiv_download_paper.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::models::DownloadInput;

/// Save a paper's PDF to a local directory.
pub struct DownloadPaperTool;

#[async_trait::async_trait]
impl McpTool for DownloadPaperTool {
    fn name(&self) -> &'static str {
        "arxiv_download_paper"
    }

    fn description(&self) -> &'static str {
        "Downloads the full, original PDF of a paper to a directory on the user's local machine. \
         Use this to save papers for the user's archives or to hand a local file path to another \
         tool for PDF extraction."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "The arXiv identifier."
                },
                "destination_dir": {
                    "type": "string",
                    "description": "The absolute path to the directory where the PDF should be saved."
                }
            },
            "required": ["paper_id", "destination_dir"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: DownloadInput = serde_json::from_value(input)?;
        params.validate()?;
        let paper_id = params.paper_id.trim();

        tokio::fs::create_dir_all(&params.destination_dir).await?;

        let bytes = ctx.client.download_pdf(paper_id).await.map_err(ToolError::from)?;

        let file_path = params.destination_dir.join(params.file_name());
        tokio::fs::write(&file_path, &bytes).await?;

        tracing::info!(paper_id, path = %file_path.display(), size = bytes.len(), "Saved PDF");

        Ok(format!("Success: Saved PDF for {paper_id} to {}", file_path.display()))
    }
}
