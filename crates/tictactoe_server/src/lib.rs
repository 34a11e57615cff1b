//! Tic-tac-toe service library.
//!
//! One shared game behind a small REST API, plus a client and a terminal
//! UI that play it.
//!
//! # Architecture
//!
//! - **Service**: owns the single [`GameState`](tictactoe_engine::GameState)
//!   and validates moves before handing them to the engine
//! - **API**: axum router exposing `GET /game`, `POST /move`, `POST /reset`
//! - **Client**: typed reqwest client for that API
//! - **TUI**: ratatui front end built on the client
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictactoe_server::{GameService, ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = Arc::new(GameService::new());
//! serve(&ServerConfig::default(), service).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod cli;
mod client;
mod config;
mod error;
mod service;
pub mod tui;
mod validation;

// Crate-level exports - HTTP surface
pub use api::{MoveRequest, router, serve, serve_with_shutdown};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Client
pub use client::RestGameClient;

// Crate-level exports - Configuration
pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

// Crate-level exports - Errors
pub use error::{ApiError, ClientError, ConfigError, ErrorBody, MoveError};

// Crate-level exports - Game service
pub use service::GameService;
pub use validation::{
    GameInProgress, KnownPlayer, LegalMove, PlayersTurn, SquareIsEmpty, ValidatedMove,
    WithinBounds,
};
