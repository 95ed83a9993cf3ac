use crate::domain::Artikel;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticleCreateIntent {
    Input(char),
    Backspace,
    NextField,
    Submit,
    Created { artikel: Artikel },
    /// Create failed. The draft stays as typed.
    Failed { message: String },
}

impl Intent for ArticleCreateIntent {}
