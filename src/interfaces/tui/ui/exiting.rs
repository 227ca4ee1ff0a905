use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Exit Confirmation", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to exit?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if app.dirty {
        text.push(Line::from(Span::styled(
            "There are unsaved changes",
            Style::default().fg(colors::WARNING),
        )));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "[y] quit  [s] save and quit  [n] cancel",
        Style::default().fg(colors::MUTED),
    )));

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner_area);
}
