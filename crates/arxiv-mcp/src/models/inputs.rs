//! Input models for MCP tool parameters.
//!
//! Field names follow the snake_case keys advertised in each tool's schema.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::CitationFormat;
use crate::config::api;
use crate::error::{ToolError, ToolResult};

/// Input for keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    /// Search query (e.g. "electron", "au:einstein", "cat:cs.AI").
    pub query: String,

    /// Maximum results to return; capped at [`api::MAX_RESULTS_CAP`].
    #[serde(default = "default_max_results", deserialize_with = "deserialize_count")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    api::DEFAULT_MAX_RESULTS
}

/// Accept any JSON number, truncating fractions (`10.0` and `7.5` are valid).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(de::Error::custom(format!("expected a non-negative count, got {value}")));
    }
    Ok(value.trunc().min(f64::from(u32::MAX)) as u32)
}

impl SearchInput {
    /// Check the query and clamp `max_results` to the API cap.
    pub fn validate(&mut self) -> ToolResult<()> {
        require_non_blank("query", &self.query)?;
        if self.max_results == 0 {
            return Err(ToolError::validation("max_results", "must be at least 1"));
        }
        self.max_results = self.max_results.min(api::MAX_RESULTS_CAP);
        Ok(())
    }
}

/// Input for trending papers in a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    /// arXiv category (e.g. "cs.AI", "physics.gen-ph").
    pub category: String,
}

impl CategoryInput {
    /// Reject a blank category.
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("category", &self.category)
    }
}

/// Input for tools keyed by a single paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperIdInput {
    /// arXiv identifier (e.g. "1706.03762").
    pub paper_id: String,
}

impl PaperIdInput {
    /// Reject a blank identifier.
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("paper_id", &self.paper_id)
    }
}

/// Input for citation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationInput {
    /// arXiv identifier.
    pub paper_id: String,

    /// Citation style.
    #[serde(default)]
    pub format: CitationFormat,
}

impl CitationInput {
    /// Reject a blank identifier.
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("paper_id", &self.paper_id)
    }
}

/// Input for PDF download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadInput {
    /// arXiv identifier.
    pub paper_id: String,

    /// Directory the PDF is written into; created if missing.
    pub destination_dir: PathBuf,
}

impl DownloadInput {
    /// Reject a blank identifier or destination.
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("paper_id", &self.paper_id)?;
        require_non_blank("destination_dir", &self.destination_dir.to_string_lossy())
    }

    /// File name the PDF is saved under (`/` in old-style ids becomes `_`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.paper_id.trim().replace('/', "_"))
    }
}

fn require_non_blank(field: &str, value: &str) -> ToolResult<()> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(())
}
