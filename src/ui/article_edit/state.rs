use crate::domain::{format_preis, parse_preis, Artikel, ArtikelId};
use crate::ui::form::TextField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Bezeichnung,
    Preis,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Bezeichnung => EditField::Preis,
            EditField::Preis => EditField::Bezeichnung,
        }
    }
}

/// Form bound to a fetched article.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    /// Id from the route; used for the update URL.
    pub id: ArtikelId,
    /// The article as fetched. Never modified.
    pub original: Artikel,
    pub bezeichnung: TextField,
    pub preis: TextField,
    pub ausgesondert: bool,
    pub focus: EditField,
    /// An update request is in flight.
    pub saving: bool,
    pub error: Option<String>,
}

impl EditForm {
    pub fn from_artikel(id: ArtikelId, artikel: Artikel) -> Self {
        Self {
            id,
            bezeichnung: TextField::new(artikel.bezeichnung.clone()),
            preis: TextField::new(format_preis(artikel.preis)),
            ausgesondert: artikel.is_ausgesondert(),
            original: artikel,
            focus: EditField::default(),
            saving: false,
            error: None,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            EditField::Bezeichnung => &mut self.bezeichnung,
            EditField::Preis => &mut self.preis,
        }
    }

    /// The fetched article with the form's values merged in.
    ///
    /// An untouched price field yields the fetched price bit for bit.
    pub fn merged(&self) -> Result<Artikel, String> {
        let preis = if self.preis.value() == format_preis(self.original.preis) {
            self.original.preis
        } else {
            parse_preis(self.preis.value())
                .ok_or_else(|| format!("Price '{}' is not a number", self.preis.value()))?
        };
        Ok(self
            .original
            .with_changes(self.bezeichnung.value(), preis, self.ausgesondert))
    }

    pub fn is_dirty(&self) -> bool {
        self.merged()
            .map(|merged| merged != self.original)
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArticleEditState {
    /// Not opened yet.
    #[default]
    Unloaded,
    Loading {
        id: ArtikelId,
    },
    /// No usable id, or the article could not be fetched.
    Failed {
        id: Option<ArtikelId>,
        message: String,
    },
    Editing(EditForm),
}

impl UiState for ArticleEditState {}

impl ArticleEditState {
    pub fn form(&self) -> Option<&EditForm> {
        match self {
            ArticleEditState::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ArticleEditState::Failed { message, .. } => Some(message),
            ArticleEditState::Editing(form) => form.error.as_deref(),
            _ => None,
        }
    }
}
