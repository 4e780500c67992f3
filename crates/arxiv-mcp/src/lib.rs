//! arXiv MCP Server
//!
//! A Model Context Protocol (MCP) server for the arXiv query API.
//! Enables LLM agents to search papers, read abstracts, generate citations
//! and download PDFs.
//!
//! # Features
//!
//! - **7 MCP Tools**: search, trending, related papers, details, summary, citations, download
//! - **Rate-limited**: at most one query every three seconds, process-wide
//! - **Shape-stable parsing**: Atom feeds normalize to uniform [`Paper`] records
//!   whether they hold zero, one or many entries
//!
//! # Example
//!
//! ```no_run
//! use arxiv_mcp::{client::ArxivClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!
//!     let url = "http://export.arxiv.org/api/query?id_list=1706.03762";
//!     for paper in client.fetch_arxiv(url).await? {
//!         println!("{}: {}", paper.id, paper.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ParseError, ToolError};
pub use models::Paper;
