//! 快捷键帮助弹窗

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const LIST_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Move selection"),
    ("g/G", "First / last node"),
    ("PgUp/PgDn", "Scroll a page"),
    ("/", "Search by message or tag"),
    ("Enter/l/e", "Edit selected node"),
    ("Tab 1-3", "Switch tab"),
    ("a / A", "Add text node / pick type"),
    ("c", "Duplicate node"),
    ("d", "Delete node"),
    ("y", "Copy message to clipboard"),
    ("s", "Save flow"),
    ("q", "Quit"),
];

const EDITOR_KEYS: &[(&str, &str)] = &[
    ("j/k", "Move between fields"),
    ("Enter", "Edit field or add item"),
    ("h/l ←/→", "Cycle type, reply kind or operator"),
    ("Space", "Cycle condition subject"),
    ("u", "Edit button URL"),
    ("m", "Upload media from a local file"),
    ("+/-", "Adjust delay by 10s"),
    ("x", "Remove reply, tag or condition"),
    ("Esc", "Back to node list"),
];

fn section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(keys.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help", popup::HELP).render(frame, area);

    let mut lines = section("Node list", LIST_KEYS);
    lines.extend(section("Editor", EDITOR_KEYS));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(colors::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner_area);
}
