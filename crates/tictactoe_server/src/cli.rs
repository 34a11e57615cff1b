//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - one shared game over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Single-game tic-tac-toe service and terminal client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game service
    Serve {
        /// Host to bind to [default: 127.0.0.1]
        #[arg(long, env = "TICTACTOE_HOST")]
        host: Option<String>,

        /// Port to bind to [default: 8000]
        #[arg(short, long, env = "TICTACTOE_PORT")]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long, env = "TICTACTOE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Run the terminal UI against a running service
    Tui {
        /// Game service URL
        #[arg(long, env = "TICTACTOE_SERVER_URL", default_value = "http://127.0.0.1:8000")]
        server_url: String,
    },
}
