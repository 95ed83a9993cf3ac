//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "shop-admin",
    version,
    about = "Terminal administration for the shop's article and customer catalog"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the REST backend base URL (e.g. https://localhost:8443)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to open at startup (e.g. /artikelA)
    #[arg(long, value_name = "PATH")]
    pub start: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file selected by `--config` (or the default one) and
    /// apply the overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Flags win over file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.backend.base_url = base_url.clone();
        }
        if let Some(start) = &self.start {
            config.ui.start_path = start.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
