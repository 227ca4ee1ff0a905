//! Detail panel: tabs for message content, conditions and analytics

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, ListState,
        Paragraph, Tabs, Wrap,
    },
};
use strum::IntoEnumIterator;

use crate::flow::{ActionKind, FlowNode};
use crate::interfaces::tui::app::{App, DetailTab, EditorRow, Focus};
use crate::interfaces::tui::constants::colors;
use crate::services::{AnalyticsSummary, Preview, empty_state};

const LABEL_WIDTH: usize = 11;

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{:<width$}", text, width = LABEL_WIDTH),
        Style::default().fg(colors::MUTED),
    )
}

fn action_hint(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors::SUCCESS)
            .add_modifier(Modifier::BOLD),
    )
}

fn row_line(node: &FlowNode, row: &EditorRow) -> Line<'static> {
    match row {
        EditorRow::Kind => Line::from(vec![
            label("Type"),
            Span::styled(
                format!("◀ {} ▶", node.kind.label()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        EditorRow::Message => Line::from(vec![
            label("Message"),
            Span::styled(node.message.clone(), Style::default().fg(Color::White)),
        ]),
        EditorRow::MediaUrl => {
            let url = node
                .media
                .as_ref()
                .map(|m| m.url.clone())
                .filter(|u| !u.is_empty());
            Line::from(vec![
                label("Media URL"),
                match url {
                    Some(url) => Span::styled(url, Style::default().fg(Color::Blue)),
                    None => Span::styled("(none, [m] to upload)", Style::default().fg(colors::MUTED)),
                },
            ])
        }
        EditorRow::MediaCaption => Line::from(vec![
            label("Caption"),
            Span::styled(
                node.media
                    .as_ref()
                    .map(|m| m.caption.clone())
                    .unwrap_or_default(),
                Style::default().fg(Color::White),
            ),
        ]),
        EditorRow::Response(id) => {
            let Some(response) = node.response(id) else {
                return Line::from("");
            };
            let mut spans = vec![
                label("Button"),
                Span::styled(
                    response.text.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", response.kind.label()),
                    Style::default().fg(Color::Magenta),
                ),
            ];
            if let Some(action) = &response.action {
                let target = match action.kind {
                    ActionKind::Jump => format!(" → node {}", action.value),
                    ActionKind::Link => format!(" → {}", action.value),
                    ActionKind::Tag => format!(" → tag {}", action.value),
                    ActionKind::Subscribe => format!(" → subscribe {}", action.value),
                };
                spans.push(Span::styled(target, Style::default().fg(Color::Blue)));
            }
            Line::from(spans)
        }
        EditorRow::AddResponse => Line::from(vec![label(""), action_hint("+ Add reply")]),
        EditorRow::Tag(id) => {
            let text = node
                .tags
                .iter()
                .find(|t| &t.id == id)
                .map(|t| format!("#{}", t.label))
                .unwrap_or_default();
            Line::from(vec![
                label("Tag"),
                Span::styled(text, Style::default().fg(colors::WARNING)),
            ])
        }
        EditorRow::AddTag => Line::from(vec![label(""), action_hint("+ Add tag")]),
        EditorRow::Delay => Line::from(vec![
            label("Delay"),
            Span::styled(
                format!("{}s", node.delay_seconds),
                Style::default().fg(Color::White),
            ),
        ]),
        EditorRow::Condition(id) => {
            let Some(condition) = node.condition(id) else {
                return Line::from("");
            };
            Line::from(vec![
                label("If"),
                Span::styled(
                    condition.subject.label(),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(" "),
                Span::styled(
                    condition.operator.label(),
                    Style::default().fg(colors::WARNING),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("'{}'", condition.value),
                    Style::default().fg(Color::White),
                ),
            ])
        }
        EditorRow::AddCondition => Line::from(vec![label(""), action_hint("+ Add condition")]),
    }
}

fn draw_rows(frame: &mut Frame, app: &App, node: &FlowNode, area: Rect) {
    let rows = EditorRow::for_node(node, app.tab);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(node, row)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if app.focus == Focus::Editor && !rows.is_empty() {
        state.select(Some(app.editor_cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(frame: &mut Frame, node: &FlowNode, area: Rect) {
    let preview = Preview::of(node);
    let mut lines = Vec::new();

    if let Some(media_line) = preview.media_line() {
        lines.push(Line::from(Span::styled(
            media_line,
            Style::default().fg(Color::Blue),
        )));
        if let Some(caption) = preview.media.as_ref().and_then(|m| m.caption.clone()) {
            lines.push(Line::from(Span::styled(
                caption,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }
    if let Some(body) = preview.body {
        lines.push(Line::from(body));
    }
    lines.push(Line::from(""));
    for button in preview.buttons {
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", button),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if preview.delay_seconds > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Sent after {}s", preview.delay_seconds),
            Style::default().fg(colors::MUTED),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Preview")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_message_tab(frame: &mut Frame, app: &App, node: &FlowNode, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    draw_rows(frame, app, node, chunks[0]);
    draw_preview(frame, node, chunks[1]);
}

fn draw_conditions_tab(frame: &mut Frame, app: &App, node: &FlowNode, area: Rect) {
    match empty_state(node) {
        Some(message) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(1)])
                .split(area);
            let notice = Paragraph::new(Span::styled(
                message,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(notice, chunks[0]);
            draw_rows(frame, app, node, chunks[1]);
        }
        None => draw_rows(frame, app, node, area),
    }
}

fn draw_analytics_tab(frame: &mut Frame, node: &FlowNode, area: Rect) {
    let summary = AnalyticsSummary::from(&node.metadata.analytics);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    let value_style = Style::default()
        .fg(colors::SUCCESS)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = summary
        .chart_series()
        .iter()
        .map(|point| {
            Line::from(vec![
                label(point.label),
                Span::styled(point.value.to_string(), value_style),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        label("CTR"),
        Span::styled(summary.click_rate_text(), Style::default().fg(colors::WARNING)),
    ]));
    lines.push(Line::from(vec![
        label("CVR"),
        Span::styled(
            summary.conversion_rate_text(),
            Style::default().fg(colors::WARNING),
        ),
    ]));
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let bars: Vec<Bar> = summary
        .chart_series()
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value)
                .label(Line::from(point.label))
                .text_value(point.value.to_string())
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Performance")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .bar_style(Style::default().fg(colors::PRIMARY))
        .value_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(chart, chunks[1]);
}

/// Draw the panel for the selected node
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Editor {
        colors::PRIMARY
    } else {
        colors::MUTED
    };
    let block = Block::default()
        .title("Details")
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let Some(node) = app.selected_node() else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No node selected",
                Style::default().fg(colors::MUTED),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tabs
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Tab body
        ])
        .split(inner);

    let titles: Vec<&str> = DetailTab::iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(colors::MUTED))
        .highlight_style(
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, chunks[0]);

    let header = Line::from(vec![
        Span::styled(
            node.id.short().to_string(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}  ", node.kind.label()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!(
                "Last modified: {}",
                node.metadata.modified_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[1]);

    match app.tab {
        DetailTab::Message => draw_message_tab(frame, app, node, chunks[2]),
        DetailTab::Conditions => draw_conditions_tab(frame, app, node, chunks[2]),
        DetailTab::Analytics => draw_analytics_tab(frame, node, chunks[2]),
    }
}
