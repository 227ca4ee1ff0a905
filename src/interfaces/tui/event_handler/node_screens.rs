//! Event handlers for node-level screens
//!
//! Handles: Main with the sidebar focused, AddContent, DeleteConfirm

use ratatui::crossterm::event::KeyCode;
use strum::IntoEnumIterator;

use crate::flow::NodeKind;
use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input while the sidebar has focus
pub fn handle_node_list(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Esc => {
            if app.is_searching() {
                app.clear_search();
            }
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('e') => {
            app.focus_editor();
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='3') => app.select_tab(c as usize - '1' as usize),
        KeyCode::Char('a') => app.add_node(NodeKind::Text),
        KeyCode::Char('A') => {
            app.add_content_cursor = 0;
            app.current_screen = CurrentScreen::AddContent;
        }
        KeyCode::Char('c') => app.duplicate_selected(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if app.store.len() > 1 {
                app.current_screen = CurrentScreen::DeleteConfirm;
            } else {
                app.set_error("The last remaining node cannot be deleted");
            }
        }
        KeyCode::Char('s') => app.save_with_status(),
        KeyCode::Char('y') => app.copy_message(),
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        KeyCode::Char('q') => app.current_screen = CurrentScreen::Exiting,
        _ => {}
    }
    Ok(false)
}

/// Handle the node kind picker
pub fn handle_add_content_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    let kinds: Vec<NodeKind> = NodeKind::iter().collect();
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.add_content_cursor = app.add_content_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.add_content_cursor = (app.add_content_cursor + 1).min(kinds.len() - 1);
        }
        KeyCode::Enter => {
            if let Some(kind) = kinds.get(app.add_content_cursor) {
                app.add_node(*kind);
            }
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Esc | KeyCode::Char('q') => app.current_screen = CurrentScreen::Main,
        _ => {}
    }
    Ok(false)
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.delete_selected();
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}
