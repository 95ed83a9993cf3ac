//! Customer search view (`/kunde`). Read-only: lookup by id or by surname.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CustomerSearchIntent;
pub use reducer::CustomerSearchReducer;
pub use state::CustomerSearchState;
pub use view::render_customer_search;
