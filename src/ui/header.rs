use crate::router::Router;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: view title, current location and backend.
pub struct Header<'a> {
    router: &'a Router,
    backend: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(router: &'a Router, backend: &'a str) -> Self {
        Self { router, backend }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.router.view().title(), Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.router.location().to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.backend.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
