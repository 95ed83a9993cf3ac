//! Article edit view (`/artikelU?id=`).
//!
//! # Workflow
//!
//! ```text
//! Open{id} ──→ Loading ──Loaded──→ Editing ──Save──→ Editing{saving}
//!                 │                   │                  │
//!             LoadFailed            Cancel        Saved / SaveFailed
//!                 ↓                   ↓                  ↓
//!              Failed              → /home     → /artikelA | Editing{error}
//! ```
//!
//! Saving merges the edited description, price and decommissioned flag into
//! the fetched article and sends the full entity, so id, version and all
//! server-owned fields go back unchanged.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ArticleEditIntent;
pub use reducer::ArticleEditReducer;
pub use state::{ArticleEditState, EditField, EditForm};
pub use view::render_article_edit;
