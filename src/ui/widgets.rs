//! Building blocks shared by the view templates.

use crate::ui::form::TextField;
use crate::ui::theme::{ACCENT, FIELD_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Bordered single-line input. The focused field gets the accent border.
pub fn input_field<'a>(label: &'a str, field: &'a TextField, focused: bool) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { FIELD_BORDER };
    let mut spans = vec![Span::styled(field.value(), Style::default().fg(HEADER_TEXT))];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Error text when present, otherwise the busy hint, otherwise nothing.
pub fn render_message(frame: &mut Frame<'_>, area: Rect, error: Option<&str>, busy: Option<&str>) {
    let line = match (error, busy) {
        (Some(error), _) => Line::from(Span::styled(
            format!(" ✗ {error}"),
            Style::default().fg(STATUS_ERROR),
        )),
        (None, Some(busy)) => Line::from(Span::styled(
            format!(" … {busy}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
        (None, None) => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}
