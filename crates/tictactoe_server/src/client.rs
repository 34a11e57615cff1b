//! REST client for the game service.

use crate::api::MoveRequest;
use crate::error::{ClientError, ErrorBody};
use tictactoe_engine::{GameState, Player};
use tracing::{debug, info, instrument, warn};

/// Typed HTTP client for one game service.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a client reusing a configured [`reqwest::Client`].
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Returns the service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the current game.
    #[instrument(skip(self))]
    pub async fn get_game(&self) -> Result<GameState, ClientError> {
        debug!("Getting game state");
        let response = self
            .client
            .get(format!("{}/game", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    /// Plays `player`'s mark at (`row`, `col`).
    #[instrument(skip(self))]
    pub async fn make_move(
        &self,
        row: i64,
        col: i64,
        player: Player,
    ) -> Result<GameState, ClientError> {
        info!("Making move");
        let request = MoveRequest::new(row, col, player.to_string());
        let response = self
            .client
            .post(format!("{}/move", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub async fn reset_game(&self) -> Result<GameState, ClientError> {
        info!("Resetting game");
        let response = self
            .client
            .post(format!("{}/reset", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<GameState, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| ClientError::Decode {
                message: e.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let err = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { detail, error }) => ClientError::Rejected {
                code: error,
                detail,
            },
            Err(_) => ClientError::Rejected {
                code: "http_error".to_string(),
                detail: format!("HTTP {}", status),
            },
        };
        warn!(%status, error = %err, "Request rejected");
        Err(err)
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = RestGameClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
