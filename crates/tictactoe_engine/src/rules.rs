//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They report what the
//! board shows; combining them into a game outcome is the engine's job.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{LINES, check_winner, has_line};
