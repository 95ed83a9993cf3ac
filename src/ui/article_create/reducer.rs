use crate::domain::{parse_preis, Artikel};
use crate::rest::ApiRequest;
use crate::router::{with_id, ARTIKEL_SEARCH};
use crate::ui::article_create::intent::ArticleCreateIntent;
use crate::ui::article_create::state::ArticleCreateState;
use crate::ui::mvi::{Effect, Reducer, Reduction};

pub struct ArticleCreateReducer;

impl Reducer for ArticleCreateReducer {
    type State = ArticleCreateState;
    type Intent = ArticleCreateIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Reduction<Self::State> {
        match intent {
            ArticleCreateIntent::Input(ch) => {
                state.focused_field_mut().push(ch);
                Reduction::new(state)
            }
            ArticleCreateIntent::Backspace => {
                state.focused_field_mut().backspace();
                Reduction::new(state)
            }
            ArticleCreateIntent::NextField => {
                state.focus = state.focus.next();
                Reduction::new(state)
            }
            ArticleCreateIntent::Submit => {
                if state.submitting {
                    return Reduction::new(state);
                }
                let Some(preis) = parse_preis(state.preis.value()) else {
                    state.error = Some(format!(
                        "Price '{}' is not a number",
                        state.preis.value()
                    ));
                    return Reduction::new(state);
                };
                let draft = Artikel::draft(state.bezeichnung.value(), preis);
                state.submitting = true;
                state.error = None;
                Reduction::with_effect(state, Effect::Request(ApiRequest::CreateArtikel { draft }))
            }
            ArticleCreateIntent::Created { artikel } => {
                state.submitting = false;
                // List view looks the new article up by its server-assigned id.
                let target = match artikel.id {
                    Some(id) => with_id(ARTIKEL_SEARCH, id),
                    None => ARTIKEL_SEARCH.to_string(),
                };
                Reduction::with_effect(state, Effect::Navigate(target))
            }
            ArticleCreateIntent::Failed { message } => {
                state.submitting = false;
                state.error = Some(message);
                Reduction::new(state)
            }
        }
    }
}
