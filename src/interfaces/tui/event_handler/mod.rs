//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - node_screens: Main (sidebar focus), AddContent, DeleteConfirm
//! - editor_screens: Main (editor focus), EditField
//! - misc_screens: inline search, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

mod editor_screens;
mod misc_screens;
mod node_screens;

use editor_screens::*;
use misc_screens::*;
use node_screens::*;

/// Handle keyboard input based on current screen. Returns true to exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        return handle_inline_search(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::Main => match app.focus {
            Focus::List => handle_node_list(app, key_code),
            Focus::Editor => handle_editor(app, key_code),
        },
        CurrentScreen::AddContent => handle_add_content_screen(app, key_code),
        CurrentScreen::EditField => handle_edit_field_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
