//! Error types for the tic-tac-toe service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Player, Position};

/// Why a move was rejected.
///
/// Display gives the client-facing message; it never changes for a given
/// variant. None of these mutate the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Player is neither `X` nor `O`.
    #[display("Player must be X or O")]
    InvalidPlayer {
        /// What the client sent.
        player: String,
    },
    /// Player moved out of turn.
    #[display("Not your turn")]
    OutOfTurn {
        /// Who tried to move.
        player: Player,
    },
    /// Row or column outside `0..=2`.
    #[display("Invalid position")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
    /// Target cell already holds a mark.
    #[display("Position already taken")]
    CellOccupied {
        /// The occupied cell.
        position: Position,
    },
    /// There is already a winner or a draw.
    #[display("Game is over")]
    GameOver,
}

impl MoveError {
    /// Client-facing message, the same text Display prints.
    pub fn message(&self) -> &'static str {
        match self {
            MoveError::InvalidPlayer { .. } => "Player must be X or O",
            MoveError::OutOfTurn { .. } => "Not your turn",
            MoveError::OutOfBounds { .. } => "Invalid position",
            MoveError::CellOccupied { .. } => "Position already taken",
            MoveError::GameOver => "Game is over",
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::InvalidPlayer { .. } => "invalid_player",
            MoveError::OutOfTurn { .. } => "out_of_turn",
            MoveError::OutOfBounds { .. } => "out_of_bounds",
            MoveError::CellOccupied { .. } => "cell_occupied",
            MoveError::GameOver => "game_over",
        }
    }
}

/// JSON body of every rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String,
    /// Stable error code.
    pub error: String,
}

/// Error returned by HTTP handlers.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// The move failed validation.
    #[from]
    #[display("{_0}")]
    Move(MoveError),
    /// The request could not be understood at all.
    #[display("{detail}")]
    BadRequest {
        /// What went wrong while reading the request.
        detail: String,
    },
}

impl ApiError {
    /// Text sent back as `detail`.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Move(err) => err.message().to_string(),
            ApiError::BadRequest { detail } => detail.clone(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Move(err) => err.code(),
            ApiError::BadRequest { .. } => "bad_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
            error: self.code().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure talking to the game service.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ClientError {
    /// The service answered with a validation error.
    #[display("{detail}")]
    Rejected {
        /// Stable error code from the service.
        code: String,
        /// Human-readable reason from the service.
        detail: String,
    },
    /// The request never got an answer.
    #[display("Network error: {message}")]
    Transport {
        /// Underlying error text.
        message: String,
    },
    /// The answer could not be decoded.
    #[display("Unexpected response: {message}")]
    Decode {
        /// Underlying error text.
        message: String,
    },
}

impl ClientError {
    /// Returns the service error code for rejections.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}
