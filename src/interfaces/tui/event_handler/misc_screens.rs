//! Event handlers for miscellaneous screens
//!
//! Handles: inline search, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            // Keep the filter applied
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_search();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.apply_search();
        }
        _ => {}
    }
    Ok(false)
}

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle exit confirmation. `s` saves first; a failed save keeps the editor open.
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
        KeyCode::Char('s') | KeyCode::Char('S') => match app.save_flow() {
            Ok(()) => return Ok(true),
            Err(e) => {
                app.set_error(e.format_simple());
                app.current_screen = CurrentScreen::Main;
            }
        },
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}
