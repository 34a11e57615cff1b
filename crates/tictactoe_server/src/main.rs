//! Tic-tac-toe - service and terminal client.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tictactoe_server::{Cli, Command, GameService, ServerConfig, serve, tui};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port, config } => run_server(config, host, port).await,
        Command::Tui { server_url } => tui::run_tui(server_url).await,
    }
}

/// Run the HTTP game service
#[instrument(skip_all)]
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    initialize_server_tracing();

    let config = ServerConfig::load(config_path.as_deref(), host, port)?;
    info!(address = %config.address(), "Starting tic-tac-toe service");

    let service = Arc::new(GameService::new());
    serve(&config, service).await
}

fn initialize_server_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
