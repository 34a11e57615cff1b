//! Stateless rendering of the [`App`].

use super::app::App;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use tictactoe_engine::{Cell, Position};

const HELP: &str = "←↑↓→ move  Enter play  r reset  f refresh  q quit";

/// Draws the whole UI into the frame.
pub fn draw(frame: &mut Frame, app: &App) {
    frame.render_widget(GameView::new(app), frame.area());
}

/// The board, status, error and help lines as one widget.
pub struct GameView<'a> {
    app: &'a App,
}

impl<'a> GameView<'a> {
    /// Wraps the app for rendering.
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn cell_span(&self, pos: Position) -> Span<'static> {
        let cell = self
            .app
            .game()
            .map(|game| game.board().get(pos))
            .unwrap_or_default();

        let symbol = match cell {
            Cell::Empty => "   ".to_string(),
            mark => format!(" {} ", mark.symbol()),
        };

        let mut style = match cell {
            Cell::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Cell::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Cell::Empty => Style::default(),
        };
        if !self.app.is_playable(pos) {
            style = style.add_modifier(Modifier::DIM);
        }
        if pos == self.app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(symbol, style)
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let separator = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(Line::styled("───┼───┼───", separator));
            }
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::styled("│", separator));
                }
                if let Some(pos) = Position::new(row, col) {
                    spans.push(self.cell_span(pos));
                }
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled(
                self.app.status_line(),
                Style::default().fg(Color::Yellow),
            ),
            Line::default(),
        ];
        lines.extend(self.board_lines());
        lines.push(Line::default());
        if let Some(error) = self.app.error() {
            lines.push(Line::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::styled(HELP, Style::default().fg(Color::DarkGray)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title("Tic-Tac-Toe")
                    .borders(Borders::ALL)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}
