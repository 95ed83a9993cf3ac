//! The active view and its bound state.
//!
//! Exactly one controller state exists at a time. Activating a route builds
//! fresh state; the previous view's state is dropped with it.

use crate::router::{Activation, ViewKind, BEZEICHNUNG_PARAM, ID_PARAM, NACHNAME_PARAM};
use crate::ui::article_create::ArticleCreateState;
use crate::ui::article_edit::{ArticleEditIntent, ArticleEditReducer, ArticleEditState};
use crate::ui::article_search::{ArticleSearchIntent, ArticleSearchReducer, ArticleSearchState};
use crate::ui::customer_search::{
    CustomerSearchIntent, CustomerSearchReducer, CustomerSearchState,
};
use crate::ui::mvi::{Reducer, Reduction};

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Home,
    ArticleSearch(ArticleSearchState),
    ArticleCreate(ArticleCreateState),
    ArticleEdit(ArticleEditState),
    CustomerSearch(CustomerSearchState),
}

impl ActiveView {
    /// Fresh state for the activated view, plus whatever the view requests
    /// on entry (e.g. loading the article named by `?id=`).
    pub fn activate(activation: &Activation) -> Reduction<ActiveView> {
        let location = &activation.location;
        let id = location.param(ID_PARAM).map(str::to_string);
        match activation.view {
            ViewKind::Home => Reduction::new(ActiveView::Home),
            ViewKind::ArticleSearch => ArticleSearchReducer::reduce(
                ArticleSearchState::default(),
                ArticleSearchIntent::Open {
                    query: id.or_else(|| location.param(BEZEICHNUNG_PARAM).map(str::to_string)),
                },
            )
            .map(ActiveView::ArticleSearch),
            ViewKind::ArticleCreate => {
                Reduction::new(ActiveView::ArticleCreate(ArticleCreateState::default()))
            }
            ViewKind::ArticleEdit => ArticleEditReducer::reduce(
                ArticleEditState::default(),
                ArticleEditIntent::Open { id },
            )
            .map(ActiveView::ArticleEdit),
            ViewKind::CustomerSearch => CustomerSearchReducer::reduce(
                CustomerSearchState::default(),
                CustomerSearchIntent::Open {
                    query: id.or_else(|| location.param(NACHNAME_PARAM).map(str::to_string)),
                },
            )
            .map(ActiveView::CustomerSearch),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ActiveView::Home => ViewKind::Home,
            ActiveView::ArticleSearch(_) => ViewKind::ArticleSearch,
            ActiveView::ArticleCreate(_) => ViewKind::ArticleCreate,
            ActiveView::ArticleEdit(_) => ViewKind::ArticleEdit,
            ActiveView::CustomerSearch(_) => ViewKind::CustomerSearch,
        }
    }

    /// Error currently shown by the view.
    pub fn error(&self) -> Option<&str> {
        match self {
            ActiveView::Home => None,
            ActiveView::ArticleSearch(state) => state.error.as_deref(),
            ActiveView::ArticleCreate(state) => state.error.as_deref(),
            ActiveView::ArticleEdit(state) => state.error(),
            ActiveView::CustomerSearch(state) => state.error.as_deref(),
        }
    }
}
