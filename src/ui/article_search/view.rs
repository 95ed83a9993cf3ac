use crate::domain::{format_preis, Artikel};
use crate::ui::article_search::state::ArticleSearchState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use crate::ui::widgets::{input_field, render_message};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

pub fn render_article_search(frame: &mut Frame<'_>, area: Rect, state: &ArticleSearchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        input_field("ID oder Bezeichnung (Enter: suchen)", &state.query, true),
        chunks[0],
    );

    let items: Vec<ListItem> = state.results.iter().map(artikel_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Artikel ({})", state.results.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    let mut list_state = ListState::default();
    if !state.results.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    render_message(
        frame,
        chunks[2],
        state.error.as_deref(),
        state.loading.then_some("Suche läuft"),
    );
}

fn artikel_item(artikel: &Artikel) -> ListItem<'static> {
    let id = artikel
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut spans = vec![
        Span::styled(format!("{id:>6}  "), Style::default().fg(HEADER_TEXT)),
        Span::raw(format!("{:<32}", artikel.bezeichnung)),
        Span::raw(format!("{:>10} €", format_preis(artikel.preis))),
    ];
    if let Some(version) = artikel.version {
        spans.push(Span::raw(format!("   v{version}")));
    }
    if artikel.is_ausgesondert() {
        spans.push(Span::styled(
            "  ausgesondert",
            Style::default().fg(STATUS_ERROR),
        ));
    }
    ListItem::new(Line::from(spans))
}
