//! Terminal User Interface (TUI) module
//!
//! Interactive editor for the conversation flow: a node sidebar on the left,
//! the message/conditions/analytics panel on the right

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, CurrentScreen, DetailTab, EditTarget, EditorRow, Focus};
pub use event_handler::handle_key_event;
pub use ui::ui as draw;

use crate::config::StaticConfig;
use crate::repository::FlowRepository;

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application until the user quits
pub fn run_tui(
    config: &StaticConfig,
    repository: Box<dyn FlowRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load before touching the terminal so errors print normally
    let mut app = App::new(repository, config)?;
    info!(
        "TUI started with {} nodes from {}",
        app.store.len(),
        app.repository.describe()
    );

    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr))?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    loop_outcome(res)
}

/// Log a loop failure and hand it back to the caller
fn loop_outcome(res: io::Result<()>) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = &res {
        error!("TUI loop failed: {}", err);
    }
    res?;
    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key_event(app, key.code)?
        {
            return Ok(());
        }
    }
}
