use crate::rest::ApiRequest;
use crate::router::{with_id, ARTIKEL_EDIT};
use crate::ui::article_search::intent::ArticleSearchIntent;
use crate::ui::article_search::state::ArticleSearchState;
use crate::ui::form::TextField;
use crate::ui::mvi::{Effect, Reducer, Reduction};

pub struct ArticleSearchReducer;

impl Reducer for ArticleSearchReducer {
    type State = ArticleSearchState;
    type Intent = ArticleSearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Reduction<Self::State> {
        match intent {
            ArticleSearchIntent::Open { query } => match query {
                Some(query) => {
                    state.query = TextField::new(query);
                    submit(state)
                }
                None => Reduction::new(state),
            },
            ArticleSearchIntent::Input(ch) => {
                state.query.push(ch);
                Reduction::new(state)
            }
            ArticleSearchIntent::Backspace => {
                state.query.backspace();
                Reduction::new(state)
            }
            ArticleSearchIntent::Submit => submit(state),
            ArticleSearchIntent::SelectNext => {
                if !state.results.is_empty() {
                    state.selected = (state.selected + 1) % state.results.len();
                }
                Reduction::new(state)
            }
            ArticleSearchIntent::SelectPrevious => {
                if !state.results.is_empty() {
                    state.selected = state
                        .selected
                        .checked_sub(1)
                        .unwrap_or(state.results.len() - 1);
                }
                Reduction::new(state)
            }
            ArticleSearchIntent::EditSelected => {
                match state.selected_artikel().and_then(|a| a.id) {
                    Some(id) => {
                        Reduction::with_effect(state, Effect::Navigate(with_id(ARTIKEL_EDIT, id)))
                    }
                    None => {
                        state.error = Some("No article selected".to_string());
                        Reduction::new(state)
                    }
                }
            }
            ArticleSearchIntent::Loaded { artikel } => {
                state.results = artikel;
                state.selected = 0;
                state.loading = false;
                state.error = None;
                Reduction::new(state)
            }
            ArticleSearchIntent::Failed { message } => {
                state.loading = false;
                state.error = Some(message);
                Reduction::new(state)
            }
        }
    }
}

fn submit(mut state: ArticleSearchState) -> Reduction<ArticleSearchState> {
    let request = search_request(state.query.value());
    state.loading = true;
    state.error = None;
    Reduction::with_effect(state, Effect::Request(request))
}

/// Numeric input is an id, anything else a description filter.
fn search_request(query: &str) -> ApiRequest {
    let query = query.trim();
    if query.is_empty() {
        return ApiRequest::ListArtikel { bezeichnung: None };
    }
    match query.parse() {
        Ok(id) => ApiRequest::GetArtikel { id },
        Err(_) => ApiRequest::ListArtikel {
            bezeichnung: Some(query.to_string()),
        },
    }
}
