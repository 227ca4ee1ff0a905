use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Draw title bar with version and node count
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Chatflow Editor",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Nodes: {} ", app.store.len()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.repository.describe(),
            Style::default().fg(Color::White),
        ),
    ];
    if app.dirty {
        spans.push(Span::styled(
            " [modified]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    if app.inline_search_mode {
        return vec![
            ("Enter", "Keep filter", Color::Green),
            ("Esc", "Clear", Color::Red),
        ];
    }
    match app.current_screen {
        CurrentScreen::Main => match app.focus {
            Focus::List => vec![
                ("j/k", "Navigate", Color::Cyan),
                ("/", "Search", Color::Cyan),
                ("Enter", "Edit", Color::Cyan),
                ("a/A", "Add", Color::Green),
                ("c", "Duplicate", Color::Yellow),
                ("d", "Delete", Color::Red),
                ("Tab", "Tab", Color::Cyan),
                ("s", "Save", Color::Green),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            Focus::Editor => vec![
                ("j/k", "Row", Color::Cyan),
                ("Enter", "Edit/Add", Color::Green),
                ("h/l", "Change", Color::Yellow),
                ("x", "Remove", Color::Red),
                ("Tab", "Tab", Color::Cyan),
                ("Esc", "Back", Color::Magenta),
            ],
        },
        CurrentScreen::AddContent => vec![
            ("j/k", "Choose", Color::Cyan),
            ("Enter", "Add", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::EditField => vec![
            ("Enter", "Apply", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Exiting => vec![
            ("y", "Quit", Color::Green),
            ("s", "Save & Quit", Color::Yellow),
            ("n", "Cancel", Color::Red),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
