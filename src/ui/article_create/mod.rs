//! Article create view (`/artikelS`).

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ArticleCreateIntent;
pub use reducer::ArticleCreateReducer;
pub use state::{ArticleCreateState, CreateField};
pub use view::render_article_create;
