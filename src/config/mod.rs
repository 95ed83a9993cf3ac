//! Configuration loaded once at startup.
//!
//! The file lives at `~/.config/shop-admin/config.toml` (platform equivalent
//! via `dirs`). A missing file means defaults; CLI flags override values
//! before validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, LoggingConfig, UiConfig};
