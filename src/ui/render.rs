use crate::ui::app::App;
use crate::ui::article_create::render_article_create;
use crate::ui::article_edit::render_article_edit;
use crate::ui::article_search::render_article_search;
use crate::ui::controller::ActiveView;
use crate::ui::customer_search::render_customer_search;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, backend: &str) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.router(), backend).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, app.view());
    let footer_widget = Footer::new(
        app.view().kind(),
        app.router().can_go_back(),
        app.status(),
    );
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, view: &ActiveView) {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    match view {
        ActiveView::Home => render_home(frame, inner),
        ActiveView::ArticleSearch(state) => render_article_search(frame, inner, state),
        ActiveView::ArticleCreate(state) => render_article_create(frame, inner, state),
        ActiveView::ArticleEdit(state) => render_article_edit(frame, inner, state),
        ActiveView::CustomerSearch(state) => render_customer_search(frame, inner, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{RouteTable, Router};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(start: &str) -> String {
        screen_of(&App::new(Router::new(RouteTable::shop(), start)))
    }

    fn screen_of(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, app, "https://localhost:8443"))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn home_shows_menu_and_title() {
        let screen = rendered("/home");
        assert!(screen.contains("Shop Administration"));
        assert!(screen.contains("Artikel anlegen"));
        assert!(screen.contains("/home"));
    }

    #[test]
    fn back_hint_only_with_history() {
        let mut app = App::new(Router::new(RouteTable::shop(), "/home"));
        assert!(!screen_of(&app).contains("Esc: Back"));

        app.navigate("/kunde");
        assert!(screen_of(&app).contains("Esc: Back"));
    }

    #[test]
    fn edit_without_id_shows_error() {
        let screen = rendered("/artikelU");
        assert!(screen.contains("No article id given"));
    }
}
