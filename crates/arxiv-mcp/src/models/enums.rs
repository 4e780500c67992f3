//! Enumeration types for API and tool parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Citation style for `arxiv_get_paper_citations`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CitationFormat {
    /// BibTeX `@article` entry.
    #[default]
    Bibtex,
    /// American Psychological Association.
    Apa,
    /// Modern Language Association.
    Mla,
}

impl CitationFormat {
    /// Lowercase name as used in tool schemas.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bibtex => "bibtex",
            Self::Apa => "apa",
            Self::Mla => "mla",
        }
    }
}

impl FromStr for CitationFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bibtex" => Ok(Self::Bibtex),
            "apa" => Ok(Self::Apa),
            "mla" => Ok(Self::Mla),
            other => Err(format!("unknown citation format '{other}' (expected bibtex, apa or mla)")),
        }
    }
}

impl TryFrom<String> for CitationFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CitationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key accepted by the arXiv query API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Best match first.
    #[default]
    Relevance,
    /// Newest submission first.
    SubmittedDate,
}

impl SortBy {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::SubmittedDate => "submittedDate",
        }
    }
}
