use crate::domain::Kunde;
use crate::ui::customer_search::state::CustomerSearchState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::widgets::{input_field, render_message};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_customer_search(frame: &mut Frame<'_>, area: Rect, state: &CustomerSearchState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    frame.render_widget(
        input_field("ID oder Nachname (Enter: suchen)", &state.query, true),
        rows[0],
    );

    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|kunde| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>6}  ", kunde.id), Style::default().fg(HEADER_TEXT)),
                Span::raw(kunde.display_name()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(bordered(format!("Kunden ({})", state.results.len())))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    let mut list_state = ListState::default();
    if !state.results.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, columns[0], &mut list_state);

    let details = state
        .selected_kunde()
        .map(detail_lines)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(details)
            .block(bordered("Details".to_string()))
            .wrap(Wrap { trim: false }),
        columns[1],
    );

    render_message(
        frame,
        rows[2],
        state.error.as_deref(),
        state.loading.then_some("Suche läuft"),
    );
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn detail_lines(kunde: &Kunde) -> Vec<Line<'static>> {
    kunde
        .attribute_lines()
        .into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{key}: "), Style::default().fg(HEADER_SEPARATOR)),
                Span::raw(value),
            ])
        })
        .collect()
}
