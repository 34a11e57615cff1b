//! State transitions: apply a move, start over.
//!
//! Ongoing --apply_move--> Ongoing | Won | Drawn. Terminal states only leave
//! through [`reset`], which replaces the state wholesale.

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, StateInvariants};
use crate::rules::{check_draw, check_winner};
use crate::{Cell, GameState, Player, Position};
use tracing::{debug, instrument};

/// Places `player`'s mark at `position` and returns the next state.
///
/// The move must already be legal: right player, empty cell, game ongoing.
/// The winner is computed before the draw, and a draw is only flagged when
/// the full board holds no line. The turn passes only while the game is
/// still ongoing.
#[instrument(skip(state), fields(row = position.row(), col = position.col(), player = %player))]
pub fn apply_move(mut state: GameState, position: Position, player: Player) -> GameState {
    debug_assert!(state.board.is_empty(position), "apply_move on occupied cell");

    state.board.set(position, Cell::from(player));
    state.winner = check_winner(&state.board);
    state.is_draw = state.winner.is_none() && check_draw(&state.board);

    if !state.is_over() {
        state.current_player = player.opponent();
    } else {
        debug!(status = %state.status(), board = %state.board, "Game finished");
    }

    #[cfg(debug_assertions)]
    if let Err(violations) = StateInvariants::check_all(&state) {
        panic!("state invariants violated after move: {:?}", violations);
    }

    state
}

/// Fresh game: empty board, X to move, no winner, no draw.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}
