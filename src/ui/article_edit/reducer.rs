use crate::domain::ArtikelId;
use crate::rest::ApiRequest;
use crate::router::{with_id, ARTIKEL_SEARCH, HOME};
use crate::ui::article_edit::intent::ArticleEditIntent;
use crate::ui::article_edit::state::{ArticleEditState, EditForm};
use crate::ui::mvi::{Effect, Reducer, Reduction};

pub struct ArticleEditReducer;

impl Reducer for ArticleEditReducer {
    type State = ArticleEditState;
    type Intent = ArticleEditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State> {
        match intent {
            ArticleEditIntent::Open { id } => open(id),
            ArticleEditIntent::Cancel => {
                Reduction::with_effect(state, Effect::Navigate(HOME.to_string()))
            }
            ArticleEditIntent::Loaded { artikel } => match state {
                ArticleEditState::Loading { id } => {
                    Reduction::new(ArticleEditState::Editing(EditForm::from_artikel(id, artikel)))
                }
                other => Reduction::new(other),
            },
            ArticleEditIntent::LoadFailed { message } => match state {
                ArticleEditState::Loading { id } => Reduction::new(ArticleEditState::Failed {
                    id: Some(id),
                    message,
                }),
                other => Reduction::new(other),
            },
            intent => match state {
                ArticleEditState::Editing(form) => reduce_form(form, intent),
                other => Reduction::new(other),
            },
        }
    }
}

fn open(id: Option<String>) -> Reduction<ArticleEditState> {
    let Some(raw) = id else {
        return Reduction::new(ArticleEditState::Failed {
            id: None,
            message: "No article id given".to_string(),
        });
    };
    match raw.trim().parse::<ArtikelId>() {
        Ok(id) => Reduction::with_effect(
            ArticleEditState::Loading { id },
            Effect::Request(ApiRequest::GetArtikel { id }),
        ),
        Err(_) => Reduction::new(ArticleEditState::Failed {
            id: None,
            message: format!("'{raw}' is not an article id"),
        }),
    }
}

fn reduce_form(mut form: EditForm, intent: ArticleEditIntent) -> Reduction<ArticleEditState> {
    match intent {
        ArticleEditIntent::Input(ch) => {
            form.focused_field_mut().push(ch);
        }
        ArticleEditIntent::Backspace => {
            form.focused_field_mut().backspace();
        }
        ArticleEditIntent::NextField => {
            form.focus = form.focus.next();
        }
        ArticleEditIntent::ToggleAusgesondert => {
            form.ausgesondert = !form.ausgesondert;
        }
        ArticleEditIntent::Save => {
            if form.saving {
                return Reduction::new(ArticleEditState::Editing(form));
            }
            match form.merged() {
                Ok(artikel) => {
                    let id = form.id;
                    form.saving = true;
                    form.error = None;
                    return Reduction::with_effect(
                        ArticleEditState::Editing(form),
                        Effect::Request(ApiRequest::UpdateArtikel { id, artikel }),
                    );
                }
                Err(message) => {
                    form.error = Some(message);
                }
            }
        }
        ArticleEditIntent::Saved { artikel } => {
            form.saving = false;
            let id = artikel.id.unwrap_or(form.id);
            return Reduction::with_effect(
                ArticleEditState::Editing(form),
                Effect::Navigate(with_id(ARTIKEL_SEARCH, id)),
            );
        }
        ArticleEditIntent::SaveFailed { message } => {
            form.saving = false;
            form.error = Some(message);
        }
        ArticleEditIntent::Open { .. }
        | ArticleEditIntent::Cancel
        | ArticleEditIntent::Loaded { .. }
        | ArticleEditIntent::LoadFailed { .. } => {}
    }
    Reduction::new(ArticleEditState::Editing(form))
}
