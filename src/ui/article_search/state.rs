use crate::domain::Artikel;
use crate::ui::form::TextField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleSearchState {
    pub query: TextField,
    pub results: Vec<Artikel>,
    pub selected: usize,
    /// A search request is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for ArticleSearchState {}

impl ArticleSearchState {
    pub fn selected_artikel(&self) -> Option<&Artikel> {
        self.results.get(self.selected)
    }
}
