//! Landing view: a static menu of the other views.

use crate::router::{ARTIKEL_CREATE, ARTIKEL_SEARCH, KUNDE_SEARCH};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct MenuEntry {
    pub key: char,
    pub function_key: u8,
    pub label: &'static str,
    pub path: &'static str,
}

pub const MENU: [MenuEntry; 3] = [
    MenuEntry {
        key: '1',
        function_key: 2,
        label: "Artikel suchen",
        path: ARTIKEL_SEARCH,
    },
    MenuEntry {
        key: '2',
        function_key: 3,
        label: "Artikel anlegen",
        path: ARTIKEL_CREATE,
    },
    MenuEntry {
        key: '3',
        function_key: 4,
        label: "Kunden suchen",
        path: KUNDE_SEARCH,
    },
];

/// Menu entry selected by `key` on the home view.
pub fn menu_target(key: char) -> Option<&'static str> {
    MENU.iter().find(|entry| entry.key == key).map(|entry| entry.path)
}

pub fn render_home(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Shop Administration", Style::default().fg(ACCENT))),
        Line::from(""),
    ];
    lines.extend(MENU.iter().map(|entry| {
        Line::from(vec![
            Span::styled(
                format!("  [{}] F{}  ", entry.key, entry.function_key),
                Style::default().fg(ACCENT),
            ),
            Span::styled(entry.label, Style::default().fg(HEADER_TEXT)),
        ])
    }));
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
