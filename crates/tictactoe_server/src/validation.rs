//! Move validation as an ordered list of named checks.
//!
//! Each check is a pure predicate over the request and the current state.
//! [`LegalMove`] runs them in order and stops at the first failure, so a
//! request that is wrong in several ways always reports the same error.

use crate::error::MoveError;
use tictactoe_engine::{GameState, Player, Position};
use tracing::instrument;

/// A move that passed every check and can go to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ValidatedMove {
    /// Who moves.
    pub player: Player,
    /// Where.
    pub position: Position,
}

/// Check 1: the player is `X` or `O`.
pub struct KnownPlayer;

impl KnownPlayer {
    /// Parses the raw player mark.
    pub fn check(raw: &str) -> Result<Player, MoveError> {
        raw.parse::<Player>().map_err(|_| MoveError::InvalidPlayer {
            player: raw.to_string(),
        })
    }
}

/// Check 2: it is this player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Compares against the current player.
    pub fn check(player: Player, state: &GameState) -> Result<(), MoveError> {
        if player != state.current_player() {
            Err(MoveError::OutOfTurn { player })
        } else {
            Ok(())
        }
    }
}

/// Check 3: row and column are on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Converts raw coordinates into a [`Position`].
    pub fn check(row: i64, col: i64) -> Result<Position, MoveError> {
        Position::try_from_signed(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

/// Check 4: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Looks the cell up on the current board.
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(position) {
            Err(MoveError::CellOccupied { position })
        } else {
            Ok(())
        }
    }
}

/// Check 5: nobody has won and the game is not drawn.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves on a finished game.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// All checks, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates a raw move request against `state`.
    #[instrument(skip(state))]
    pub fn check(
        row: i64,
        col: i64,
        player: &str,
        state: &GameState,
    ) -> Result<ValidatedMove, MoveError> {
        let player = KnownPlayer::check(player)?;
        PlayersTurn::check(player, state)?;
        let position = WithinBounds::check(row, col)?;
        SquareIsEmpty::check(position, state)?;
        GameInProgress::check(state)?;
        Ok(ValidatedMove::new(player, position))
    }
}
