use crate::rest::{ApiRequest, ApiResponse, RestError};
use crate::router::{
    Activation, Location, Router, ViewKind, ARTIKEL_SEARCH, BEZEICHNUNG_PARAM, ID_PARAM,
    KUNDE_SEARCH, NACHNAME_PARAM,
};
use crate::ui::article_create::{ArticleCreateIntent, ArticleCreateReducer};
use crate::ui::article_edit::{ArticleEditIntent, ArticleEditReducer};
use crate::ui::article_search::{ArticleSearchIntent, ArticleSearchReducer};
use crate::ui::controller::ActiveView;
use crate::ui::customer_search::{CustomerSearchIntent, CustomerSearchReducer};
use crate::ui::home::menu_target;
use crate::ui::mvi::{Effect, Reducer};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Identifies one backend call: the router generation of the view that
/// issued it and a sequence number unique across the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub generation: u64,
    pub seq: u64,
}

#[derive(Debug)]
pub enum UiCommand {
    /// Run one backend call. The answer comes back with the same tag.
    Api { tag: RequestTag, request: ApiRequest },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Run a view reducer against the active view and execute its effect.
///
/// Does nothing when a different view is active.
macro_rules! dispatch_view {
    ($self:expr, $variant:ident, $reducer:ty, $intent:expr) => {{
        if let ActiveView::$variant(state) = &mut $self.view {
            let reduction = <$reducer>::reduce(std::mem::take(state), $intent);
            *state = reduction.state;
            if let Some(effect) = reduction.effect {
                $self.run_effect(effect);
            }
        }
    }};
}

pub struct App {
    should_quit: bool,
    router: Router,
    view: ActiveView,
    command_tx: Option<UiCommandSender>,
    /// Requests issued before the executor was attached.
    deferred: Vec<UiCommand>,
    /// App-level notice shown in the footer.
    status: Option<String>,
    next_seq: u64,
    /// Latest request of the active view. Only its answer is applied.
    awaiting: Option<RequestTag>,
}

impl App {
    /// Create the app positioned at the router's current location. The
    /// initial view is activated immediately.
    pub fn new(router: Router) -> Self {
        let mut app = Self {
            should_quit: false,
            view: ActiveView::Home,
            router,
            command_tx: None,
            deferred: Vec::new(),
            status: None,
            next_seq: 0,
            awaiting: None,
        };
        let initial = app.router.current().clone();
        app.activate(initial);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Connect the executor. Requests issued so far are sent now.
    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_tx = Some(sender);
        for command in std::mem::take(&mut self.deferred) {
            self.send_command(command);
        }
    }

    pub fn navigate(&mut self, target: &str) {
        let activation = self.router.navigate(target);
        self.activate(activation);
    }

    pub fn back(&mut self) {
        match self.router.back() {
            Some(activation) => self.activate(activation),
            None => self.status = Some("No previous view".to_string()),
        }
    }

    pub fn on_tick(&mut self) {}

    /// Route a finished backend call to the view that issued it.
    ///
    /// Answers for a view that is no longer active, or for a request the view
    /// has since superseded, are discarded.
    pub fn on_api_response(&mut self, tag: RequestTag, response: ApiResponse) {
        if !self.router.is_current(tag.generation) {
            tracing::debug!(
                generation = tag.generation,
                current = self.router.generation(),
                "Dropping response for an inactive view"
            );
            return;
        }
        if self.awaiting != Some(tag) {
            tracing::debug!(
                seq = tag.seq,
                latest = ?self.awaiting.map(|t| t.seq),
                "Dropping superseded response"
            );
            return;
        }
        self.awaiting = None;
        if let Some(err) = response.error() {
            tracing::warn!(
                status = ?err.status(),
                error_type = err.error_type(),
                error = %err,
                "Backend request failed"
            );
            self.status = Some(err.user_message());
        }

        match response {
            ApiResponse::ArtikelFound(result) => match self.view.kind() {
                ViewKind::ArticleEdit => {
                    let intent = match result {
                        Ok(artikel) => ArticleEditIntent::Loaded { artikel },
                        Err(err) => ArticleEditIntent::LoadFailed {
                            message: err.user_message(),
                        },
                    };
                    self.dispatch_article_edit(intent);
                }
                _ => self.dispatch_article_search(match result {
                    Ok(artikel) => ArticleSearchIntent::Loaded {
                        artikel: vec![artikel],
                    },
                    Err(err) => search_failed(err),
                }),
            },
            ApiResponse::ArtikelListed(result) => self.dispatch_article_search(match result {
                Ok(artikel) => ArticleSearchIntent::Loaded { artikel },
                Err(err) => search_failed(err),
            }),
            ApiResponse::ArtikelCreated(result) => self.dispatch_article_create(match result {
                Ok(artikel) => ArticleCreateIntent::Created { artikel },
                Err(err) => ArticleCreateIntent::Failed {
                    message: err.user_message(),
                },
            }),
            ApiResponse::ArtikelUpdated(result) => self.dispatch_article_edit(match result {
                Ok(artikel) => ArticleEditIntent::Saved { artikel },
                Err(err) => ArticleEditIntent::SaveFailed {
                    message: err.user_message(),
                },
            }),
            ApiResponse::KundeFound(result) => self.dispatch_customer_search(match result {
                Ok(kunde) => CustomerSearchIntent::Loaded {
                    kunden: vec![kunde],
                },
                Err(err) => customer_failed(err),
            }),
            ApiResponse::KundenListed(result) => self.dispatch_customer_search(match result {
                Ok(kunden) => CustomerSearchIntent::Loaded { kunden },
                Err(err) => customer_failed(err),
            }),
        }
    }

    /// Keys not handled globally go to the active view.
    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match self.view.kind() {
            ViewKind::Home => {
                if let KeyCode::Char(ch) = key.code {
                    if let Some(target) = menu_target(ch) {
                        self.navigate(target);
                    }
                }
            }
            ViewKind::ArticleSearch => {
                let intent = match key.code {
                    KeyCode::Char('e') if ctrl => ArticleSearchIntent::EditSelected,
                    KeyCode::Char(ch) if !ctrl => ArticleSearchIntent::Input(ch),
                    KeyCode::Backspace => ArticleSearchIntent::Backspace,
                    KeyCode::Enter => ArticleSearchIntent::Submit,
                    KeyCode::Down => ArticleSearchIntent::SelectNext,
                    KeyCode::Up => ArticleSearchIntent::SelectPrevious,
                    _ => return,
                };
                self.dispatch_article_search(intent);
            }
            ViewKind::ArticleCreate => {
                let intent = match key.code {
                    KeyCode::Char(ch) if !ctrl => ArticleCreateIntent::Input(ch),
                    KeyCode::Backspace => ArticleCreateIntent::Backspace,
                    KeyCode::Tab => ArticleCreateIntent::NextField,
                    KeyCode::Enter => ArticleCreateIntent::Submit,
                    _ => return,
                };
                self.dispatch_article_create(intent);
            }
            ViewKind::ArticleEdit => {
                let intent = match key.code {
                    KeyCode::Char('s') if ctrl => ArticleEditIntent::Save,
                    KeyCode::Char('d') if ctrl => ArticleEditIntent::ToggleAusgesondert,
                    KeyCode::Char(ch) if !ctrl => ArticleEditIntent::Input(ch),
                    KeyCode::Backspace => ArticleEditIntent::Backspace,
                    KeyCode::Tab => ArticleEditIntent::NextField,
                    KeyCode::Enter => ArticleEditIntent::Save,
                    KeyCode::Esc => ArticleEditIntent::Cancel,
                    _ => return,
                };
                self.dispatch_article_edit(intent);
            }
            ViewKind::CustomerSearch => {
                let intent = match key.code {
                    KeyCode::Char(ch) if !ctrl => CustomerSearchIntent::Input(ch),
                    KeyCode::Backspace => CustomerSearchIntent::Backspace,
                    KeyCode::Enter => CustomerSearchIntent::Submit,
                    KeyCode::Down => CustomerSearchIntent::SelectNext,
                    KeyCode::Up => CustomerSearchIntent::SelectPrevious,
                    _ => return,
                };
                self.dispatch_customer_search(intent);
            }
        }
    }

    // ========================================================================
    // View dispatch (MVI pattern)
    // ========================================================================

    pub fn dispatch_article_search(&mut self, intent: ArticleSearchIntent) {
        dispatch_view!(self, ArticleSearch, ArticleSearchReducer, intent);
    }

    pub fn dispatch_article_create(&mut self, intent: ArticleCreateIntent) {
        dispatch_view!(self, ArticleCreate, ArticleCreateReducer, intent);
    }

    pub fn dispatch_article_edit(&mut self, intent: ArticleEditIntent) {
        dispatch_view!(self, ArticleEdit, ArticleEditReducer, intent);
    }

    pub fn dispatch_customer_search(&mut self, intent: CustomerSearchIntent) {
        dispatch_view!(self, CustomerSearch, CustomerSearchReducer, intent);
    }

    fn activate(&mut self, activation: Activation) {
        self.awaiting = None;
        self.status = activation
            .redirected
            .then(|| format!("Unknown location, showing {}", activation.location));
        let reduction = ActiveView::activate(&activation);
        self.view = reduction.state;
        if let Some(effect) = reduction.effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Request(request) => {
                let tag = RequestTag {
                    generation: self.router.generation(),
                    seq: self.next_seq,
                };
                self.next_seq = self.next_seq.wrapping_add(1);
                self.awaiting = Some(tag);
                tracing::debug!(
                    request = request.label(),
                    generation = tag.generation,
                    seq = tag.seq,
                    "Issuing request"
                );
                self.bind_search(&request);
                self.send_command(UiCommand::Api { tag, request });
            }
            Effect::Navigate(target) => self.navigate(&target),
        }
    }

    /// Search views keep their last query in the location, so coming back
    /// to them repeats it.
    fn bind_search(&mut self, request: &ApiRequest) {
        let location = match (self.view.kind(), request) {
            (ViewKind::ArticleSearch, ApiRequest::GetArtikel { id }) => {
                Location::at(ARTIKEL_SEARCH).with_param(ID_PARAM, id.to_string())
            }
            (ViewKind::ArticleSearch, ApiRequest::ListArtikel { bezeichnung }) => {
                Location::at(ARTIKEL_SEARCH)
                    .with_param(BEZEICHNUNG_PARAM, bezeichnung.clone().unwrap_or_default())
            }
            (ViewKind::CustomerSearch, ApiRequest::GetKunde { id }) => {
                Location::at(KUNDE_SEARCH).with_param(ID_PARAM, id.to_string())
            }
            (ViewKind::CustomerSearch, ApiRequest::ListKunden { nachname }) => {
                Location::at(KUNDE_SEARCH)
                    .with_param(NACHNAME_PARAM, nachname.clone().unwrap_or_default())
            }
            _ => return,
        };
        self.router.rebind(location);
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_tx else {
            self.deferred.push(command);
            return;
        };

        if let Err(err) = sender.try_send(command) {
            tracing::error!(error = %err, "Failed to queue backend request");
            self.status = Some(format!("Request could not be queued: {err}"));
        }
    }
}

fn search_failed(err: RestError) -> ArticleSearchIntent {
    ArticleSearchIntent::Failed {
        message: err.user_message(),
    }
}

fn customer_failed(err: RestError) -> CustomerSearchIntent {
    CustomerSearchIntent::Failed {
        message: err.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Artikel;
    use crate::router::RouteTable;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_app(start: &str) -> App {
        App::new(Router::new(RouteTable::shop(), start))
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn artikel(id: u64) -> Artikel {
        Artikel {
            id: Some(id),
            bezeichnung: "Testartikel".to_string(),
            preis: 9.99,
            version: Some(1),
            ..Artikel::default()
        }
    }

    fn sent_requests(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<(RequestTag, ApiRequest)> {
        let mut out = Vec::new();
        while let Ok(UiCommand::Api { tag, request }) = rx.try_recv() {
            out.push((tag, request));
        }
        out
    }

    fn in_flight(app: &App) -> RequestTag {
        app.awaiting.expect("a request in flight")
    }

    fn type_and_submit(app: &mut App, query: &str) {
        for ch in query.chars() {
            app.on_key(press_key(KeyCode::Char(ch)));
        }
        app.on_key(press_key(KeyCode::Enter));
    }

    fn clear_query(app: &mut App) {
        for _ in 0..16 {
            app.on_key(press_key(KeyCode::Backspace));
        }
    }

    #[test]
    fn starts_on_home() {
        let app = make_app("/home");
        assert_eq!(app.view(), &ActiveView::Home);
        assert!(app.status().is_none());
    }

    #[test]
    fn unknown_start_redirects_home_with_notice() {
        let app = make_app("/bogus");
        assert_eq!(app.view().kind(), ViewKind::Home);
        assert!(app.status().is_some());
    }

    #[test]
    fn requests_before_attach_are_deferred() {
        let mut app = make_app("/artikelA?id=7");
        let (tx, mut rx) = mpsc::channel(8);
        app.attach_commands(tx);
        let sent = sent_requests(&mut rx);
        assert_eq!(
            sent,
            vec![(
                RequestTag {
                    generation: 0,
                    seq: 0
                },
                ApiRequest::GetArtikel { id: 7 }
            )]
        );
    }

    #[test]
    fn typing_and_enter_issue_search_with_current_generation() {
        let mut app = make_app("/home");
        let (tx, mut rx) = mpsc::channel(8);
        app.attach_commands(tx);
        app.on_key(press_key(KeyCode::Char('1')));
        assert_eq!(app.view().kind(), ViewKind::ArticleSearch);

        type_and_submit(&mut app, "Tisch");

        let sent = sent_requests(&mut rx);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.generation, app.router().generation());
        assert_eq!(
            sent[0].1,
            ApiRequest::ListArtikel {
                bezeichnung: Some("Tisch".to_string())
            }
        );
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut app = make_app("/artikelA?id=301");
        let stale = in_flight(&app);
        app.navigate("/kunde");
        let before = app.view().clone();

        app.on_api_response(stale, ApiResponse::ArtikelFound(Ok(artikel(301))));

        assert_eq!(app.view(), &before);
    }

    #[test]
    fn superseded_search_answer_is_ignored() {
        let mut app = make_app("/artikelA");
        type_and_submit(&mut app, "Tisch");
        let first = in_flight(&app);
        clear_query(&mut app);
        type_and_submit(&mut app, "301");
        let second = in_flight(&app);
        assert_eq!(first.generation, second.generation);

        app.on_api_response(second, ApiResponse::ArtikelFound(Ok(artikel(301))));
        app.on_api_response(first, ApiResponse::ArtikelListed(Ok(vec![artikel(1)])));

        match app.view() {
            ActiveView::ArticleSearch(state) => {
                assert_eq!(state.results, vec![artikel(301)]);
                assert!(!state.loading);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn superseded_customer_answer_does_not_end_loading() {
        let mut app = make_app("/kunde");
        type_and_submit(&mut app, "Alpha");
        let first = in_flight(&app);
        clear_query(&mut app);
        type_and_submit(&mut app, "Beta");

        app.on_api_response(first, ApiResponse::KundenListed(Ok(Vec::new())));

        match app.view() {
            ActiveView::CustomerSearch(state) => {
                assert!(state.loading);
                assert_eq!(state.query.value(), "Beta");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn response_binds_search_results() {
        let mut app = make_app("/artikelA?id=301");
        let tag = in_flight(&app);
        app.on_api_response(tag, ApiResponse::ArtikelFound(Ok(artikel(301))));

        match app.view() {
            ActiveView::ArticleSearch(state) => {
                assert_eq!(state.results, vec![artikel(301)]);
                assert!(!state.loading);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn failed_search_shows_user_message() {
        let mut app = make_app("/artikelA?id=999");
        let tag = in_flight(&app);
        app.on_api_response(
            tag,
            ApiResponse::ArtikelFound(Err(RestError::Status {
                status: 404,
                message: "Kein Artikel mit ID 999".to_string(),
            })),
        );
        assert_eq!(
            app.view().error(),
            Some("Not found: Kein Artikel mit ID 999")
        );
        assert_eq!(app.status(), Some("Not found: Kein Artikel mit ID 999"));
    }

    #[test]
    fn search_query_is_kept_in_location() {
        let mut app = make_app("/artikelA");
        let generation = app.router().generation();
        type_and_submit(&mut app, "Tisch");
        assert_eq!(
            app.router().location().to_string(),
            "/artikelA?bezeichnung=Tisch"
        );
        assert_eq!(app.router().generation(), generation);

        let mut app = make_app("/kunde");
        type_and_submit(&mut app, "7");
        assert_eq!(app.router().location().to_string(), "/kunde?id=7");
    }

    #[test]
    fn edit_then_back_repeats_list_search() {
        let mut app = make_app("/artikelA");
        type_and_submit(&mut app, "Tisch");
        let tag = in_flight(&app);
        app.on_api_response(tag, ApiResponse::ArtikelListed(Ok(vec![artikel(301)])));

        app.on_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(app.view().kind(), ViewKind::ArticleEdit);
        let edit_load = in_flight(&app);

        app.back();
        assert_eq!(
            app.router().location().to_string(),
            "/artikelA?bezeichnung=Tisch"
        );
        let repeated = in_flight(&app);
        // The edit view's late load must not touch the list view.
        app.on_api_response(edit_load, ApiResponse::ArtikelFound(Ok(artikel(301))));
        match app.view() {
            ActiveView::ArticleSearch(state) => {
                assert_eq!(state.query.value(), "Tisch");
                assert!(state.loading);
                assert!(state.results.is_empty());
            }
            other => panic!("unexpected view {other:?}"),
        }

        app.on_api_response(repeated, ApiResponse::ArtikelListed(Ok(vec![artikel(301)])));
        match app.view() {
            ActiveView::ArticleSearch(state) => assert_eq!(state.results, vec![artikel(301)]),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn escape_in_edit_goes_home() {
        let mut app = make_app("/artikelU?id=301");
        app.on_key(press_key(KeyCode::Esc));
        assert_eq!(app.view().kind(), ViewKind::Home);
    }

    #[test]
    fn saved_edit_returns_to_list_and_reloads() {
        let mut app = make_app("/artikelU?id=301");
        let (tx, mut rx) = mpsc::channel(8);
        app.attach_commands(tx);
        let load = in_flight(&app);
        app.on_api_response(load, ApiResponse::ArtikelFound(Ok(artikel(301))));
        app.on_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let save = in_flight(&app);
        app.on_api_response(save, ApiResponse::ArtikelUpdated(Ok(artikel(301))));

        assert_eq!(app.view().kind(), ViewKind::ArticleSearch);
        assert_eq!(app.router().location().to_string(), "/artikelA?id=301");
        let sent = sent_requests(&mut rx);
        let (tag, request) = sent.last().expect("reload request");
        assert_eq!(tag.generation, app.router().generation());
        assert_eq!(request, &ApiRequest::GetArtikel { id: 301 });
    }

    #[test]
    fn back_without_history_sets_notice() {
        let mut app = make_app("/home");
        app.back();
        assert_eq!(app.view().kind(), ViewKind::Home);
        assert!(app.status().is_some());
    }
}
