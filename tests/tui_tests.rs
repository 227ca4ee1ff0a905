//! TUI 集成测试：按键驱动 App，再用 TestBackend 渲染

#![cfg(feature = "tui")]

use chatflow::flow::{FlowStore, NodeKind};
use chatflow::interfaces::tui::{App, CurrentScreen, DetailTab, Focus, draw, handle_key_event};
use chatflow::repository::{FlowRepository, JsonFileRepository, MemoryRepository};
use chatflow::services::LocalMediaUploader;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, crossterm::event::KeyCode};
use tempfile::TempDir;

fn app_with(repository: Box<dyn FlowRepository>) -> App {
    App::with_store(
        FlowStore::default(),
        repository,
        Box::new(LocalMediaUploader::default()),
    )
}

fn press(app: &mut App, keys: &[KeyCode]) -> bool {
    let mut exit = false;
    for key in keys {
        exit = handle_key_event(app, *key).unwrap();
    }
    exit
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, KeyCode::Char(c)).unwrap();
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_add_node_from_picker() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('A')]);
    assert_eq!(app.current_screen, CurrentScreen::AddContent);

    // Text -> Image
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert_eq!(app.store.len(), 2);
    assert_eq!(app.selected_node().unwrap().kind, NodeKind::Image);
    assert_eq!(app.list_cursor, 1);
    assert!(app.dirty);
}

#[test]
fn test_edit_message_with_keys() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    // focus editor, move to the message row, open the popup
    press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.focus, Focus::Editor);
    assert_eq!(app.current_screen, CurrentScreen::EditField);

    for _ in 0.."Welcome! How can I help you today?".len() {
        press(&mut app, &[KeyCode::Backspace]);
    }
    type_text(&mut app, "Hello!");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert_eq!(app.selected_node().unwrap().message, "Hello!");
}

#[test]
fn test_delete_confirm_flow() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('d')]);
    // only one node: refused without a popup
    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert!(!app.error_message.is_empty());

    press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('d')]);
    assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
    press(&mut app, &[KeyCode::Char('y')]);
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.selected_id().as_str(), "1");
}

#[test]
fn test_search_then_escape() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('/')]);
    assert!(app.inline_search_mode);

    type_text(&mut app, "welcome");
    assert_eq!(app.visible_ids().len(), 1);
    assert_eq!(app.list_cursor, 0);
    // filtering never changes the selection by itself
    let added = app.store.nodes()[1].id.clone();
    assert_eq!(app.store.selected_id(), &added);

    press(&mut app, &[KeyCode::Enter]);
    assert!(!app.inline_search_mode);
    assert!(app.is_searching());

    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.is_searching());
    assert_eq!(app.visible_ids().len(), 2);
}

#[test]
fn test_save_and_quit_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flow.json");
    let mut app = app_with(Box::new(JsonFileRepository::new(&path)));

    press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('q')]);
    assert_eq!(app.current_screen, CurrentScreen::Exiting);
    assert!(press(&mut app, &[KeyCode::Char('s')]));

    let saved = JsonFileRepository::new(&path).load().unwrap();
    assert_eq!(saved.nodes.len(), 2);
}

#[test]
fn test_quit_cancel() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    assert!(!press(&mut app, &[KeyCode::Char('q'), KeyCode::Char('n')]));
    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert!(press(&mut app, &[KeyCode::Char('q'), KeyCode::Char('y')]));
}

#[test]
fn test_render_main_screen() {
    let app = app_with(Box::new(MemoryRepository::new()));
    let screen = render(&app);
    assert!(screen.contains("Chatflow Editor"));
    assert!(screen.contains("Welcome!"));
    assert!(screen.contains("Get Started"));
    assert!(screen.contains("Message"));
}

#[test]
fn test_render_conditions_empty_state() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('2')]);
    assert_eq!(app.tab, DetailTab::Conditions);
    let screen = render(&app);
    assert!(screen.contains("No conditions set."));
    assert!(screen.contains("+ Add condition"));
}

#[test]
fn test_render_analytics_tab() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('3')]);
    let screen = render(&app);
    assert!(screen.contains("CTR"));
    assert!(screen.contains("0%"));
    assert!(screen.contains("Performance"));
}

#[test]
fn test_render_popups() {
    let mut app = app_with(Box::new(MemoryRepository::new()));
    press(&mut app, &[KeyCode::Char('?')]);
    assert!(render(&app).contains("Help"));

    press(&mut app, &[KeyCode::Esc, KeyCode::Char('A')]);
    assert!(render(&app).contains("Carousel"));

    press(&mut app, &[KeyCode::Esc, KeyCode::Char('a'), KeyCode::Char('q')]);
    assert!(render(&app).contains("unsaved changes"));
}
