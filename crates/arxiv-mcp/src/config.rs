//! Configuration for the arXiv MCP server.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const QUERY_URL: &str = "http://export.arxiv.org/api/query";

    /// Base URL for PDF downloads.
    pub const PDF_URL: &str = "https://arxiv.org/pdf";

    /// Minimum spacing between two calls to the query endpoint.
    ///
    /// arXiv asks clients to make no more than one request every three seconds.
    pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(3000);

    /// Default page size for keyword searches.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Upper bound on `max_results` accepted from callers.
    pub const MAX_RESULTS_CAP: u32 = 50;

    /// Page size for trending and related-paper lookups.
    pub const LISTING_RESULTS: u32 = 10;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Base URL for `<id>.pdf` downloads.
    pub pdf_base_url: String,

    /// Minimum spacing between query requests.
    pub min_request_interval: Duration,

    /// Whole-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::QUERY_URL.to_string(),
            pdf_base_url: api::PDF_URL.to_string(),
            min_request_interval: api::MIN_REQUEST_INTERVAL,
            request_timeout: None,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            pdf_base_url: format!("{}/pdf", base_url),
            min_request_interval: Duration::from_millis(0), // No delay in tests
            request_timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognised variables: `ARXIV_API_URL`, `ARXIV_PDF_URL`,
    /// `ARXIV_MIN_INTERVAL_MS` and `ARXIV_REQUEST_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var("ARXIV_PDF_URL") {
            config.pdf_base_url = url;
        }
        if let Ok(ms) = std::env::var("ARXIV_MIN_INTERVAL_MS") {
            let ms: u64 = ms.parse().context("ARXIV_MIN_INTERVAL_MS must be an integer")?;
            config.min_request_interval = Duration::from_millis(ms);
        }
        if let Ok(secs) = std::env::var("ARXIV_REQUEST_TIMEOUT_SECS") {
            let secs: u64 =
                secs.parse().context("ARXIV_REQUEST_TIMEOUT_SECS must be an integer")?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
