//! Terminal UI client for the game service.

mod app;
mod input;
mod ui;

pub use app::{App, Command};
pub use ui::{GameView, draw};

use crate::client::RestGameClient;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Log file for the TUI; stdout belongs to the terminal.
pub const LOG_FILE: &str = "tictactoe_tui.log";

/// Runs the TUI against the service at `server_url` until the user quits.
pub async fn run_tui(server_url: String) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %server_url, "Starting tic-tac-toe TUI");
    let client = RestGameClient::new(server_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

#[instrument(skip_all, fields(server_url = %client.base_url()))]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: &RestGameClient,
) -> Result<()> {
    let mut app = App::new();
    app.apply(client.get_game().await);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(command) = app.handle_key(key.code) else {
            continue;
        };
        let result = match command {
            Command::Quit => {
                info!("User quit");
                return Ok(());
            }
            Command::Play { position, player } => {
                client
                    .make_move(position.row() as i64, position.col() as i64, player)
                    .await
            }
            Command::Reset => client.reset_game().await,
            Command::Refresh => client.get_game().await,
        };
        app.apply(result);
    }
}
