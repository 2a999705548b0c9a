use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use sequential_tools::config::{Config, RuntimeConfig};
use sequential_tools::server::SequentialToolsServer;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sequential-tools")]
#[command(about = "Sequential thinking MCP server with tool recommendations", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "SEQUENTIAL_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of thoughts kept in memory (overrides config and MAX_HISTORY_SIZE)
    #[arg(long)]
    max_history_size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env may carry RUST_LOG / MCP_NO_LOG, so read it before the subscriber starts
    Config::load_env_file();
    let runtime = RuntimeConfig::load_from_env();

    // stdout carries the MCP channel; logs go to stderr
    if !runtime.mcp_no_log {
        tracing_subscriber::fmt()
            .with_env_filter(runtime.log_level.as_str())
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = Config::load_from(cli.config.as_deref()).map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    config.apply_cli_overrides(cli.max_history_size)?;

    info!("Starting sequential-tools MCP server");

    let server = SequentialToolsServer::new(&config);

    let service = server.serve(stdio()).await.map_err(|e| {
        eprintln!("Failed to start MCP service: {}", e);
        e
    })?;

    info!("MCP server ready - waiting for requests");
    service.waiting().await?;

    Ok(())
}
