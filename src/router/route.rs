/// Landing page.
pub const HOME: &str = "/home";
/// Alias of [`HOME`].
pub const ROOT: &str = "/";
/// Article list/search.
pub const ARTIKEL_SEARCH: &str = "/artikelA";
/// Article create form.
pub const ARTIKEL_CREATE: &str = "/artikelS";
/// Article edit form, expects an `id` query parameter.
pub const ARTIKEL_EDIT: &str = "/artikelU";
/// Customer list/search.
pub const KUNDE_SEARCH: &str = "/kunde";

/// Query parameter carrying an article or customer id between views.
pub const ID_PARAM: &str = "id";
/// Description filter of the article search.
pub const BEZEICHNUNG_PARAM: &str = "bezeichnung";
/// Surname filter of the customer search.
pub const NACHNAME_PARAM: &str = "nachname";

/// The views a route can lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    ArticleSearch,
    ArticleCreate,
    ArticleEdit,
    CustomerSearch,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Home => "Home",
            ViewKind::ArticleSearch => "Artikel suchen",
            ViewKind::ArticleCreate => "Artikel anlegen",
            ViewKind::ArticleEdit => "Artikel bearbeiten",
            ViewKind::CustomerSearch => "Kunden suchen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewKind,
}

impl Route {
    pub const fn new(path: &'static str, view: ViewKind) -> Self {
        Self { path, view }
    }
}

/// Immutable path → view table with a default for unmatched paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    default_index: usize,
}

impl RouteTable {
    /// The shop's views. Unmatched paths go to `/home`.
    pub fn shop() -> Self {
        Self {
            routes: vec![
                Route::new(ROOT, ViewKind::Home),
                Route::new(HOME, ViewKind::Home),
                Route::new(ARTIKEL_SEARCH, ViewKind::ArticleSearch),
                Route::new(ARTIKEL_CREATE, ViewKind::ArticleCreate),
                Route::new(ARTIKEL_EDIT, ViewKind::ArticleEdit),
                Route::new(KUNDE_SEARCH, ViewKind::CustomerSearch),
            ],
            default_index: 1,
        }
    }

    /// First route whose path equals `path` exactly (case-sensitive).
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn default_route(&self) -> &Route {
        &self.routes[self.default_index]
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::shop()
    }
}
