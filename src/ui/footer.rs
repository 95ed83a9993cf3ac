use crate::router::ViewKind;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    view: ViewKind,
    can_go_back: bool,
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(view: ViewKind, can_go_back: bool, status: Option<&'a str>) -> Self {
        Self {
            view,
            can_go_back,
            status,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        // Esc cancels in the edit form instead of going back.
        let back = if self.can_go_back && self.view != ViewKind::ArticleEdit {
            " │ Esc: Back"
        } else {
            ""
        };
        let hints = format!(
            " {} │ F1-F4: Views{back} │ Ctrl+Q: Quit",
            view_hints(self.view)
        );
        let version = format!("v{} ", VERSION);

        let mut spans = vec![Span::styled(hints.clone(), text_style)];
        let mut used = hints.chars().count();
        if let Some(status) = self.status {
            let status = format!(" │ {status}");
            used += status.chars().count();
            spans.push(Span::styled(status, Style::default().fg(STATUS_ERROR)));
        }

        // Char count, not byte count, for the box-drawing separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn view_hints(view: ViewKind) -> &'static str {
    match view {
        ViewKind::Home => "1-3: Auswahl",
        ViewKind::ArticleSearch => "Enter: Suchen │ ↑↓: Auswahl │ Ctrl+E: Bearbeiten",
        ViewKind::ArticleCreate => "Tab: Feld │ Enter: Anlegen",
        ViewKind::ArticleEdit => {
            "Tab: Feld │ Ctrl+S: Speichern │ Ctrl+D: Aussondern │ Esc: Abbrechen"
        }
        ViewKind::CustomerSearch => "Enter: Suchen │ ↑↓: Auswahl",
    }
}
