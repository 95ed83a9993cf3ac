use crate::router::{ViewKind, ARTIKEL_CREATE, ARTIKEL_SEARCH, HOME, KUNDE_SEARCH};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Global keys first (quit, function-key navigation, back), then the view.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    let target = match key.code {
        KeyCode::F(1) => Some(HOME),
        KeyCode::F(2) => Some(ARTIKEL_SEARCH),
        KeyCode::F(3) => Some(ARTIKEL_CREATE),
        KeyCode::F(4) => Some(KUNDE_SEARCH),
        _ => None,
    };
    if let Some(target) = target {
        app.navigate(target);
        return;
    }

    // The edit view treats Esc as cancel.
    if key.code == KeyCode::Esc && app.view().kind() != ViewKind::ArticleEdit {
        app.back();
        return;
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
