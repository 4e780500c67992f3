//! Paper record produced by feed normalization.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One arXiv catalog entry in normalized form.
///
/// Every field except `pdf_url` is always present; missing source data
/// collapses to an empty string or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier (e.g. `2105.14022v1`).
    pub id: String,

    /// Title with whitespace runs collapsed.
    pub title: String,

    /// Abstract with whitespace runs collapsed.
    pub summary: String,

    /// Publication timestamp exactly as the feed reported it.
    pub published_date: String,

    /// Category terms in feed order; the first is the primary category.
    pub categories: Vec<String>,

    /// Author names in feed order.
    pub authors: Vec<String>,

    /// Link to the PDF rendition, if the entry advertised one.
    #[serde(default)]
    pub pdf_url: Option<String>,
}

impl Paper {
    /// Identifier without a trailing version suffix (`2105.14022v1` -> `2105.14022`).
    #[must_use]
    pub fn base_id(&self) -> &str {
        strip_version(&self.id)
    }

    /// Returns true if `other` names this paper, ignoring version suffixes.
    #[must_use]
    pub fn matches_id(&self, other: &str) -> bool {
        self.id == other || self.base_id() == strip_version(other)
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Get the primary category if available.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Up to `limit` author names, comma-separated, with "et al." when truncated.
    #[must_use]
    pub fn author_summary(&self, limit: usize) -> String {
        let mut names = self.authors.iter().take(limit).map(String::as_str).collect::<Vec<_>>().join(", ");
        if self.authors.len() > limit {
            names.push_str(" et al.");
        }
        names
    }

    /// Publication year, if `published_date` is an RFC 3339 timestamp or starts with a date.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        let published = self.published_date.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(published) {
            return Some(timestamp.year());
        }

        published
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year())
    }
}

fn strip_version(id: &str) -> &str {
    match id.rfind('v') {
        Some(pos) if pos > 0 => {
            let digits = &id[pos + 1..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &id[..pos]
            } else {
                id
            }
        }
        _ => id,
    }
}
