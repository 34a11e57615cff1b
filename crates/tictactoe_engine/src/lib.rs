//! Pure tic-tac-toe game logic.
//!
//! The engine knows nothing about transports or shared state. It takes a
//! [`GameState`] by value and hands back the next one.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Player, Position, engine};
//!
//! let state = engine::reset();
//! let pos = Position::new(0, 0).unwrap();
//! let state = engine::apply_move(state, pos, Player::X);
//! assert_eq!(state.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use invariants::{Invariant, InvariantSet, InvariantViolation, StateInvariants};
pub use position::{OffBoard, Position};
pub use rules::{check_draw, check_winner};
pub use types::{Board, Cell, GameState, GameStatus, Player};
