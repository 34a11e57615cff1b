//! Client-side application state.

use super::input::move_cursor;
use crate::error::ClientError;
use crossterm::event::KeyCode;
use tictactoe_engine::{GameState, GameStatus, Player, Position};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send a move to the service.
    Play {
        /// Target cell.
        position: Position,
        /// Mark to play.
        player: Player,
    },
    /// Ask the service for a new game.
    Reset,
    /// Re-fetch the game.
    Refresh,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Option<GameState>,
    cursor: Position,
    error: Option<String>,
}

impl App {
    /// Creates an app with no game loaded yet and the cursor in the center.
    pub fn new() -> Self {
        Self {
            game: None,
            cursor: Position::ALL[4],
            error: None,
        }
    }

    /// The last game state received from the service.
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last error, cleared by the next successful request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One-line summary of the game.
    pub fn status_line(&self) -> String {
        match self.game.map(|game| (game.status(), game.current_player())) {
            None => "Connecting...".to_string(),
            Some((GameStatus::Won(winner), _)) => format!("Player {} wins!", winner),
            Some((GameStatus::Drawn, _)) => "Game is a draw!".to_string(),
            Some((GameStatus::Ongoing, player)) => format!("Player {}'s turn", player),
        }
    }

    /// Returns true if clicking `pos` would send a move.
    ///
    /// Filled cells and every cell of a finished game are disabled.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.game
            .is_some_and(|game| !game.is_over() && game.board().is_empty(pos))
    }

    /// Maps a key to a command, moving the cursor as a side effect.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('f') => Some(Command::Refresh),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let game = self.game.as_ref()?;
                if self.is_playable(self.cursor) {
                    Some(Command::Play {
                        position: self.cursor,
                        player: game.current_player(),
                    })
                } else {
                    debug!(cursor = %self.cursor, "Cell disabled, ignoring");
                    None
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            _ => None,
        }
    }

    /// Records the outcome of a request. Errors are kept for display and
    /// leave the last known game in place.
    pub fn apply(&mut self, result: Result<GameState, ClientError>) {
        match result {
            Ok(game) => {
                self.game = Some(game);
                self.error = None;
            }
            Err(err) => {
                debug!(error = %err, "Request failed");
                self.error = Some(err.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
