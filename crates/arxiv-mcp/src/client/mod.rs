//! arXiv API client.
//!
//! Provides the async HTTP client used by every tool:
//! - Connection pooling via reqwest
//! - Process-wide minimum spacing between query requests
//! - Feed fetch + normalization into [`Paper`] records
//!
//! Failures are surfaced as [`ClientError`] without retries; callers decide
//! what to do with them.

mod rate_limit;

pub use rate_limit::RateLimiter;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::feed;
use crate::models::{Paper, SortBy};

/// arXiv API client.
///
/// Clones share one [`RateLimiter`], so a single client created at startup
/// enforces the spacing for the whole process.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    http: Client,

    /// Shared request clock.
    limiter: Arc<RateLimiter>,

    /// Query endpoint.
    api_url: String,

    /// Base URL for PDF downloads.
    pdf_base_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder().gzip(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            limiter: Arc::new(RateLimiter::new(config.min_request_interval)),
            api_url: config.api_url,
            pdf_base_url: config.pdf_base_url,
        })
    }

    /// Minimum spacing enforced between query requests.
    #[must_use]
    pub fn min_request_interval(&self) -> Duration {
        self.limiter.min_interval()
    }

    /// Fetch a URL through the rate limiter and return the body text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the host cannot be reached and
    /// [`ClientError::Fetch`] for a non-2xx status.
    pub async fn fetch(&self, url: &str) -> ClientResult<String> {
        tracing::debug!(url, "Fetching arXiv feed");

        let response = self.limiter.run(|| self.http.get(url).send()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::fetch(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        Ok(response.text().await?)
    }

    /// Fetch a fully-formed query URL and normalize the feed.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure, or [`ClientError::Parse`] if the body is
    /// not well-formed XML. The body is never parsed after a failed fetch.
    pub async fn fetch_arxiv(&self, url: &str) -> ClientResult<Vec<Paper>> {
        let xml = self.fetch(url).await?;
        let papers = feed::normalize(&xml)?;
        tracing::debug!(count = papers.len(), "Normalized arXiv feed");
        Ok(papers)
    }

    /// Keyword search (`search_query`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        sort: SortBy,
    ) -> ClientResult<Vec<Paper>> {
        let url = self.query_url(&[
            ("search_query", query.to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", sort.as_str().to_string()),
            ("sortOrder", "descending".to_string()),
        ])?;

        self.fetch_arxiv(url.as_str()).await
    }

    /// Search within one category (`cat:<category>`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_category(
        &self,
        category: &str,
        max_results: u32,
        sort: SortBy,
    ) -> ClientResult<Vec<Paper>> {
        self.search(&format!("cat:{category}"), max_results, sort).await
    }

    /// Look up a single paper by identifier (`id_list`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str) -> ClientResult<Option<Paper>> {
        let url = self.query_url(&[("id_list", paper_id.to_string())])?;
        let papers = self.fetch_arxiv(url.as_str()).await?;
        Ok(papers.into_iter().next())
    }

    /// Download `<pdf_base_url>/<paper_id>.pdf`.
    ///
    /// PDFs are served from a different host than the query API and are
    /// fetched without going through the rate limiter.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or non-2xx status.
    pub async fn download_pdf(&self, paper_id: &str) -> ClientResult<Vec<u8>> {
        let url = format!("{}/{}.pdf", self.pdf_base_url.trim_end_matches('/'), paper_id);
        tracing::debug!(url = %url, "Downloading PDF");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::fetch(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Build a query URL against the configured endpoint.
    fn query_url(&self, params: &[(&str, String)]) -> ClientResult<Url> {
        Ok(Url::parse_with_params(&self.api_url, params)?)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("min_request_interval", &self.limiter.min_interval())
            .finish()
    }
}
