//! 单行输入框
//!
//! 支持激活高亮、占位提示、字符计数和校验错误行

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// ```rust,ignore
/// InputField::new("Delay (seconds)", &app.form.input)
///     .active(true)
///     .placeholder("0-300")
///     .error(app.form.error.as_deref())
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// 输入框 3 行，有错误时再加 1 行
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        if self.value.is_empty() {
            match self.placeholder {
                Some(placeholder) => format!("{} ({})", self.title, placeholder),
                None => self.title.to_string(),
            }
        } else {
            format!("{} ({} chars)", self.title, self.value.chars().count())
        }
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let mut spans = vec![Span::styled(self.value, Style::default().fg(Color::White))];
        if self.is_active {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::RAPID_BLINK),
            ));
        }
        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_placeholder_when_empty() {
        let field = InputField::new("Delay", "").placeholder(Some("0-300"));
        assert_eq!(field.display_title(), "Delay (0-300)");
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        let field = InputField::new("Message", "héllo").placeholder(Some("unused"));
        assert_eq!(field.display_title(), "Message (5 chars)");
    }

    #[test]
    fn test_height_grows_with_error() {
        let field = InputField::new("Delay", "abc");
        assert_eq!(field.height(), 3);
        assert_eq!(field.error(Some("not a number")).height(), 4);
    }
}
