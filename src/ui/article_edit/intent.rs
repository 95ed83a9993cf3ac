use crate::domain::Artikel;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticleEditIntent {
    /// View activated with the raw `id` query parameter.
    Open { id: Option<String> },
    Loaded { artikel: Artikel },
    LoadFailed { message: String },
    Input(char),
    Backspace,
    NextField,
    ToggleAusgesondert,
    Save,
    Saved { artikel: Artikel },
    /// Update failed. The user's edits stay.
    SaveFailed { message: String },
    /// Leave without saving. No confirmation.
    Cancel,
}

impl Intent for ArticleEditIntent {}
