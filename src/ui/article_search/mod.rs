//! Article list/search view (`/artikelA`).
//!
//! Numeric input looks up one article by id, other input filters by
//! description, empty input lists everything. The selected result can be
//! opened in the edit view.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ArticleSearchIntent;
pub use reducer::ArticleSearchReducer;
pub use state::ArticleSearchState;
pub use view::render_article_search;
