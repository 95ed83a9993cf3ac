use crate::rest::ApiRequest;
use crate::ui::customer_search::intent::CustomerSearchIntent;
use crate::ui::customer_search::state::CustomerSearchState;
use crate::ui::form::TextField;
use crate::ui::mvi::{Effect, Reducer, Reduction};

pub struct CustomerSearchReducer;

impl Reducer for CustomerSearchReducer {
    type State = CustomerSearchState;
    type Intent = CustomerSearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Reduction<Self::State> {
        match intent {
            CustomerSearchIntent::Open { query } => match query {
                Some(query) => {
                    state.query = TextField::new(query);
                    submit(state)
                }
                None => Reduction::new(state),
            },
            CustomerSearchIntent::Input(ch) => {
                state.query.push(ch);
                Reduction::new(state)
            }
            CustomerSearchIntent::Backspace => {
                state.query.backspace();
                Reduction::new(state)
            }
            CustomerSearchIntent::Submit => submit(state),
            CustomerSearchIntent::SelectNext => {
                if !state.results.is_empty() {
                    state.selected = (state.selected + 1) % state.results.len();
                }
                Reduction::new(state)
            }
            CustomerSearchIntent::SelectPrevious => {
                if !state.results.is_empty() {
                    state.selected = state
                        .selected
                        .checked_sub(1)
                        .unwrap_or(state.results.len() - 1);
                }
                Reduction::new(state)
            }
            CustomerSearchIntent::Loaded { kunden } => {
                state.results = kunden;
                state.selected = 0;
                state.loading = false;
                state.error = None;
                Reduction::new(state)
            }
            CustomerSearchIntent::Failed { message } => {
                state.loading = false;
                state.error = Some(message);
                Reduction::new(state)
            }
        }
    }
}

fn submit(mut state: CustomerSearchState) -> Reduction<CustomerSearchState> {
    let request = search_request(state.query.value());
    state.loading = true;
    state.error = None;
    Reduction::with_effect(state, Effect::Request(request))
}

fn search_request(query: &str) -> ApiRequest {
    let query = query.trim();
    if query.is_empty() {
        return ApiRequest::ListKunden { nachname: None };
    }
    match query.parse() {
        Ok(id) => ApiRequest::GetKunde { id },
        Err(_) => ApiRequest::ListKunden {
            nachname: Some(query.to_string()),
        },
    }
}
