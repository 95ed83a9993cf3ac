use crate::domain::Kunde;
use crate::ui::form::TextField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerSearchState {
    pub query: TextField,
    pub results: Vec<Kunde>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for CustomerSearchState {}

impl CustomerSearchState {
    pub fn selected_kunde(&self) -> Option<&Kunde> {
        self.results.get(self.selected)
    }
}
