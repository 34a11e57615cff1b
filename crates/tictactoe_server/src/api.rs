//! HTTP surface: `GET /game`, `POST /move`, `POST /reset`.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::GameService;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Deserializer, Serialize};
use std::future::Future;
use std::sync::Arc;
use tictactoe_engine::GameState;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Body of `POST /move`.
///
/// `player` stays a raw string so a bad mark reaches validation and is
/// reported as such instead of as a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveRequest {
    /// Row, expected 0-2.
    #[serde(deserialize_with = "whole_number")]
    pub row: i64,
    /// Column, expected 0-2.
    #[serde(deserialize_with = "whole_number")]
    pub col: i64,
    /// `"X"` or `"O"`.
    pub player: String,
}

/// Reads any JSON integer, or a float with no fractional part, as an `i64`.
///
/// Values past the `i64` range saturate, which keeps them out of bounds
/// instead of unparseable.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(serde::de::Error::custom(format!(
            "expected a whole number, found {number}"
        ))),
    }
}

/// Builds the router over a shared [`GameService`].
pub fn router(service: Arc<GameService>) -> Router {
    Router::new()
        .route("/game", get(get_game))
        .route("/move", post(make_move))
        .route("/reset", post(reset_game))
        .layer(middleware::from_fn(log_request))
        .with_state(service)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    info!(%method, %uri, status = %response.status(), "Request handled");
    response
}

#[instrument(skip_all)]
async fn get_game(State(service): State<Arc<GameService>>) -> Json<GameState> {
    Json(service.get_state())
}

#[instrument(skip_all)]
async fn make_move(
    State(service): State<Arc<GameService>>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameState>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Malformed move request");
        ApiError::BadRequest {
            detail: rejection.body_text(),
        }
    })?;

    let state = service.make_move(request.row, request.col, &request.player)?;
    Ok(Json(state))
}

#[instrument(skip_all)]
async fn reset_game(State(service): State<Arc<GameService>>) -> Json<GameState> {
    Json(service.reset_game())
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip_all, fields(address = %config.address()))]
pub async fn serve(config: &ServerConfig, service: Arc<GameService>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.address()).await?;
    serve_with_shutdown(listener, service, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` completes.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    service: Arc<GameService>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(address = %listener.local_addr()?, "Tic-tac-toe service ready");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
