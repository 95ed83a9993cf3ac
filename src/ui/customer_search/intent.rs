use crate::domain::Kunde;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CustomerSearchIntent {
    /// View activated. A query carried by the location (`id` or `nachname`)
    /// is searched right away.
    Open { query: Option<String> },
    Input(char),
    Backspace,
    Submit,
    SelectNext,
    SelectPrevious,
    Loaded { kunden: Vec<Kunde> },
    Failed { message: String },
}

impl Intent for CustomerSearchIntent {}
