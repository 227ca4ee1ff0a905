//! 新建节点类型选择弹窗

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::widgets::Popup;
use crate::flow::NodeKind;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

fn kind_hint(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Text => "plain text message",
        NodeKind::Image => "picture with caption",
        NodeKind::Video => "video clip",
        NodeKind::Audio => "voice or music",
        NodeKind::File => "downloadable file",
        NodeKind::Carousel => "swipeable cards",
    }
}

pub fn draw_add_content_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Add Content", popup::ADD_CONTENT)
        .theme_color(colors::SUCCESS)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner_area);

    let items: Vec<ListItem> = NodeKind::iter()
        .map(|kind| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", kind.label()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(kind_hint(kind), Style::default().fg(colors::MUTED)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(colors::HIGHLIGHT_BG)
                .fg(colors::HIGHLIGHT_FG),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.add_content_cursor));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let hint = Paragraph::new(Span::styled(
        "[Enter] add  [Esc] cancel",
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(hint, chunks[1]);
}
