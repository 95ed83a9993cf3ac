use crate::ui::form::TextField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    Bezeichnung,
    Preis,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            CreateField::Bezeichnung => CreateField::Preis,
            CreateField::Preis => CreateField::Bezeichnung,
        }
    }
}

/// Draft article as typed by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleCreateState {
    pub bezeichnung: TextField,
    pub preis: TextField,
    pub focus: CreateField,
    /// A create request is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

impl UiState for ArticleCreateState {}

impl ArticleCreateState {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            CreateField::Bezeichnung => &mut self.bezeichnung,
            CreateField::Preis => &mut self.preis,
        }
    }
}
