//! Runtime configuration.
//!
//! Nothing has to be configured: with no file the tool talks to the public
//! Yahoo endpoint and writes into the current working directory. A TOML file
//! can be passed with `--config` or through [`CONFIG_ENV_VAR`]:
//!
//! ```toml
//! [provider]
//! base_url = "https://query2.finance.yahoo.com"
//! timeout_secs = 10
//!
//! [output]
//! directory = "exports"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared_utils::{
    config::{ConfigError, load_toml},
    env::get_optional_env_var,
};
use tracing::debug;

use crate::providers::yahoo::YahooConfig;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV_VAR: &str = "MARKET_DATA_EXPORT_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub provider: YahooConfig,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the workbook is written into. Empty means the current
    /// working directory.
    pub directory: PathBuf,
}

impl ExportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// Loads the config from `explicit`, else from the file named by
    /// [`CONFIG_ENV_VAR`], else falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| get_optional_env_var(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
