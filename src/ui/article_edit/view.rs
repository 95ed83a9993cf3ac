use crate::ui::article_edit::state::{ArticleEditState, EditField, EditForm};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR};
use crate::ui::widgets::{input_field, render_message};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_article_edit(frame: &mut Frame<'_>, area: Rect, state: &ArticleEditState) {
    match state {
        ArticleEditState::Unloaded => {}
        ArticleEditState::Loading { id } => {
            let busy = format!("Lade Artikel {id}");
            render_message(frame, area, None, Some(busy.as_str()));
        }
        ArticleEditState::Failed { message, .. } => {
            render_message(frame, area, Some(message.as_str()), None);
        }
        ArticleEditState::Editing(form) => render_form(frame, area, form),
    }
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &EditForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let dirty = if form.is_dirty() { "  (geändert)" } else { "" };
    let title = match form.original.version {
        Some(version) => format!("Artikel {}  Version {version}", form.id),
        None => format!("Artikel {}", form.id),
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(title, Style::default().fg(HEADER_TEXT)),
            Span::raw(dirty),
        ])),
        chunks[0],
    );
    frame.render_widget(
        input_field(
            "Bezeichnung",
            &form.bezeichnung,
            form.focus == EditField::Bezeichnung,
        ),
        chunks[1],
    );
    frame.render_widget(
        input_field("Preis", &form.preis, form.focus == EditField::Preis),
        chunks[2],
    );

    let flag = if form.ausgesondert {
        Span::styled("[x] ausgesondert", Style::default().fg(STATUS_ERROR))
    } else {
        Span::raw("[ ] ausgesondert")
    };
    frame.render_widget(Paragraph::new(Line::from(flag)), chunks[3]);

    render_message(
        frame,
        chunks[4],
        form.error.as_deref(),
        form.saving.then_some("Speichern läuft"),
    );
}
