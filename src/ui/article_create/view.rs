use crate::ui::article_create::state::{ArticleCreateState, CreateField};
use crate::ui::widgets::{input_field, render_message};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_article_create(frame: &mut Frame<'_>, area: Rect, state: &ArticleCreateState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        input_field(
            "Bezeichnung",
            &state.bezeichnung,
            state.focus == CreateField::Bezeichnung,
        ),
        chunks[0],
    );
    frame.render_widget(
        input_field("Preis", &state.preis, state.focus == CreateField::Preis),
        chunks[1],
    );
    render_message(
        frame,
        chunks[2],
        state.error.as_deref(),
        state.submitting.then_some("Artikel wird angelegt"),
    );
}
