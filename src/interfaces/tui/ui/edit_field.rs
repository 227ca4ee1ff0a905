use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_edit_field_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(target) = app.form.target.as_ref() else {
        return;
    };

    let inner_area = Popup::new("Edit", popup::EDIT_FIELD).render(frame, area);

    let field = InputField::new(target.display_title(), &app.form.input)
        .active(true)
        .placeholder(target.placeholder())
        .error(app.form.error.as_deref());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field.height()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    field.render(frame, chunks[0]);

    let hint = Paragraph::new(Span::styled(
        "[Enter] apply  [Esc] cancel",
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(hint, chunks[2]);
}
