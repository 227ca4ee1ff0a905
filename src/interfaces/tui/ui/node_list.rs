//! Sidebar: the filtered node list

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::flow::FlowNode;
use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::{MESSAGE_TRUNCATE_LENGTH, colors};
use crate::services::filter_nodes;

/// Shorten `text` to `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

fn node_item<'a>(node: &'a FlowNode, selected: bool) -> ListItem<'a> {
    let marker = if selected {
        Span::styled(
            "● ",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };

    let mut lines = vec![Line::from(vec![
        marker,
        Span::styled(
            format!("{:<8} ", node.kind.label()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            truncate(&node.message, MESSAGE_TRUNCATE_LENGTH),
            Style::default().fg(Color::White),
        ),
    ])];

    if !node.tags.is_empty() {
        let tags: Vec<String> = node.tag_labels().map(|t| format!("#{}", t)).collect();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(tags.join(" "), Style::default().fg(colors::MUTED)),
        ]));
    }
    ListItem::new(lines)
}

pub fn draw_node_list(frame: &mut Frame, app: &App, area: Rect) {
    let nodes = filter_nodes(app.store.nodes(), &app.search_input);

    let title = if app.is_searching() {
        format!("Search: \"{}\" ({} found)", app.search_input, nodes.len())
    } else {
        format!("Nodes ({})", nodes.len())
    };
    let border_color = if app.focus == Focus::List {
        colors::PRIMARY
    } else {
        colors::MUTED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );

    if nodes.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No nodes match your search",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    "[Esc]",
                    Style::default()
                        .fg(colors::WARNING)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to clear search", Style::default().fg(colors::MUTED)),
            ]),
        ];
        let empty = Paragraph::new(empty_text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let selected_id = app.store.selected_id();
    let items: Vec<ListItem> = nodes
        .iter()
        .map(|node| node_item(node, &node.id == selected_id))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.list_cursor.min(nodes.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}
