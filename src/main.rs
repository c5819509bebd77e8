//! Obsidian MCP server - stdio entry point.
//!
//! Reads configuration from flags / environment, then serves a single MCP
//! session on stdin/stdout until the host closes the stream.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::process::ExitCode;

use obsidian_mcp::types::{Config, ObservabilityConfig, ObsidianConfig, DEFAULT_OBSIDIAN_URL};
use obsidian_mcp::McpServer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "obsidian-mcp", version, about = "MCP tool server for the Obsidian Local REST API")]
struct Cli {
    /// API key of the Obsidian Local REST API plugin.
    #[arg(long, env = "OBSIDIAN_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the Obsidian Local REST API.
    #[arg(long, env = "OBSIDIAN_URL", default_value = DEFAULT_OBSIDIAN_URL)]
    url: String,

    /// Log output format (logs are written to stderr).
    #[arg(long, env = "OBSIDIAN_MCP_LOG_FORMAT", value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Unhandled error, shutting down");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> obsidian_mcp::Result<()> {
    let observability = ObservabilityConfig {
        json_logs: cli.log_format == LogFormat::Json,
        ..ObservabilityConfig::default()
    };
    obsidian_mcp::observability::init_tracing(&observability);

    let mut config = Config::new(ObsidianConfig::new(&cli.url, cli.api_key)?);
    config.observability = observability;

    tracing::info!("Connecting to Obsidian at {}", config.obsidian.base_url);

    let server = McpServer::from_config(&config)?;
    server.run_stdio().await?;

    tracing::info!("Shutting down obsidian-mcp");
    Ok(())
}
