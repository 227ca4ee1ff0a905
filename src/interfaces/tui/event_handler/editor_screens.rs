//! Event handlers for the editor panel
//!
//! Handles: Main with the editor focused, EditField

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::DELAY_STEP_SECONDS;

/// Handle main screen input while the editor has focus
pub fn handle_editor(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_editor_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_editor_cursor(1),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_row(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_row(true),
        KeyCode::Enter => app.activate_row(),
        KeyCode::Char(' ') => app.cycle_condition_subject(),
        KeyCode::Char('u') => app.edit_response_url(),
        KeyCode::Char('m') => app.begin_media_upload(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_current_item(),
        KeyCode::Char('+') => app.nudge_delay(DELAY_STEP_SECONDS),
        KeyCode::Char('-') => app.nudge_delay(-DELAY_STEP_SECONDS),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('s') => app.save_with_status(),
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        KeyCode::Esc | KeyCode::Char('q') => app.focus_list(),
        _ => {}
    }
    Ok(false)
}

/// Handle the field edit popup
pub fn handle_edit_field_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => {
            if app.commit_edit() {
                app.form.clear();
                app.current_screen = CurrentScreen::Main;
            }
        }
        KeyCode::Esc => {
            app.form.clear();
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    Ok(false)
}
