//! Error types for the arXiv MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from turning feed text into a tree.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The XML reader rejected the document.
    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally broken document the reader did not flag itself.
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl ParseError {
    /// Create a malformed-document error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Transport failure (DNS, connection refused, timeout, broken body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("ArXiv API error: {status} {status_text}")]
    Fetch {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        status_text: String,
    },

    /// Response body was not a well-formed feed.
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] ParseError),

    /// A request URL could not be assembled.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create a fetch error from a status code and reason phrase.
    #[must_use]
    pub fn fetch(status: u16, status_text: impl Into<String>) -> Self {
        Self::Fetch { status, status_text: status_text.into() }
    }

    /// HTTP status carried by a fetch error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the upstream host could not be reached.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns true if the body was not a well-formed feed.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Lookup produced no usable paper
    #[error("{0}")]
    NotFound(String),

    /// JSON serialization/deserialization error
    #[error("Invalid arguments: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while saving a download
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::NotFound(message) => message.clone(),
            Self::Validation { field, message } => {
                format!("Error: Invalid input for '{field}': {message}")
            }
            _ => format!("Error: {self}"),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
