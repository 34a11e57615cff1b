//! The single shared game.

use crate::error::MoveError;
use crate::validation::LegalMove;
use std::sync::{Mutex, MutexGuard};
use tictactoe_engine::{GameState, engine};
use tracing::{info, instrument, warn};

/// Owns the one game every client plays.
///
/// All three operations take the same lock for their whole duration, so a
/// move is validated and applied against the state no other call can touch
/// in between.
#[derive(Debug, Default)]
pub struct GameService {
    state: Mutex<GameState>,
}

impl GameService {
    /// Creates a service holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game service");
        Self {
            state: Mutex::new(engine::reset()),
        }
    }

    // The state is replaced whole and is valid between operations, so a
    // poisoned lock still guards a usable game.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Game lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Returns the current state. Never mutates.
    #[instrument(skip(self))]
    pub fn get_state(&self) -> GameState {
        *self.lock()
    }

    /// Validates and applies a move for `player` at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the state is left untouched.
    #[instrument(skip(self))]
    pub fn make_move(&self, row: i64, col: i64, player: &str) -> Result<GameState, MoveError> {
        let mut state = self.lock();

        let mv = LegalMove::check(row, col, player, &state).inspect_err(|err| {
            warn!(code = err.code(), reason = %err, "Move rejected");
        })?;

        *state = engine::apply_move(*state, mv.position, mv.player);
        info!(
            player = %mv.player,
            position = %mv.position,
            status = %state.status(),
            "Move accepted"
        );
        Ok(*state)
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn reset_game(&self) -> GameState {
        let mut state = self.lock();
        *state = engine::reset();
        info!("Game reset");
        *state
    }
}
