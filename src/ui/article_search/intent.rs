use crate::domain::Artikel;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticleSearchIntent {
    /// View activated. A query carried by the location (`id` or
    /// `bezeichnung`) is searched right away; an empty one lists everything.
    Open { query: Option<String> },
    Input(char),
    Backspace,
    Submit,
    SelectNext,
    SelectPrevious,
    /// Open the selected article in the edit view.
    EditSelected,
    Loaded { artikel: Vec<Artikel> },
    /// Search failed. Previous results stay.
    Failed { message: String },
}

impl Intent for ArticleSearchIntent {}
