//! arXiv MCP Server - Entry Point
//!
//! Serves MCP over stdio. Logs go to stderr; stdout carries the protocol.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_mcp::{ArxivClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "arxiv-mcp")]
#[command(about = "MCP server for the arXiv API")]
#[command(version)]
struct Cli {
    /// arXiv query endpoint (for mirrors or mock servers)
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Minimum milliseconds between arXiv queries
    #[arg(long, env = "ARXIV_MIN_INTERVAL_MS")]
    min_interval_ms: Option<u64>,

    /// Abort requests after this many seconds (unbounded by default)
    #[arg(long, env = "ARXIV_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting arXiv MCP server");

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(ms) = cli.min_interval_ms {
        config.min_request_interval = Duration::from_millis(ms);
    }
    if let Some(secs) = cli.request_timeout_secs {
        config.request_timeout = Some(Duration::from_secs(secs));
    }

    tracing::info!(
        api_url = %config.api_url,
        min_interval = ?config.min_request_interval,
        "Loaded configuration"
    );

    let client = ArxivClient::new(config)?;
    let server = McpServer::new(client);

    server.run_stdio().await
}
