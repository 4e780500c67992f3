//! MCP server implementation.
//!
//! Speaks MCP over stdio, the transport agent hosts spawn local servers with.

pub mod protocol;
pub mod stdio;

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

use crate::client::ArxivClient;
use crate::tools::{self, McpTool, ToolContext};

/// The arXiv tool set bound to one shared client.
pub struct McpServer {
    ctx: ToolContext,
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Register every tool against `client`.
    #[must_use]
    pub fn new(client: ArxivClient) -> Self {
        Self { ctx: ToolContext::new(Arc::new(client)), tools: tools::register_all_tools() }
    }

    /// Serve the process's stdin and stdout until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        tracing::info!(tools = self.tools.len(), "Starting MCP server in stdio mode");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, answering on `writer`.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        stdio::serve(reader, writer, &self.tools, &self.ctx).await
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("client", &self.ctx.client)
            .field("tools", &self.tools.len())
            .finish()
    }
}
