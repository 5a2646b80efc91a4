//! Runtime configuration, loaded from YAML.
//!
//! ```yaml
//! transition:
//!   base_secs: 0.4
//!   per_level_secs: 0.15
//!   moon_secs: 0.3
//! hud:
//!   show_breadcrumb: true
//!   show_busy_indicator: true
//!   show_queue_depth: false
//! log_filter: info
//! ```
//!
//! Every key is optional. A missing file is not an error: defaults apply.

use horizon_egui::HudConfig;
use horizon_nav::TransitionTiming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "HORIZON_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    pub transition: TransitionTiming,
    pub hud: HudConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            transition: TransitionTiming::default(),
            hud: HudConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl HorizonConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = match std::fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_yaml_str(&yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, else from `HORIZON_CONFIG`, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(path) => Self::load(PathBuf::from(path)),
                None => Ok(Self::default()),
            },
        }
    }
}
