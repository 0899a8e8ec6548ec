//! User configuration loaded from the navitty home directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name of the configuration inside the navitty home directory.
pub const CONFIG_FILE: &str = "config.json";

/// User-tunable settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory to open when no path argument is given.
    pub default_path: Option<PathBuf>,
    /// Whether listings include dot-prefixed entries.
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_path: None,
            show_hidden: true,
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults silently; an unreadable or
    /// malformed file yields the defaults with a logged warning.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    warn!("failed to read config {}: {error}", path.display());
                }

                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                warn!("failed to parse config {}: {error}", path.display());

                Self::default()
            }
        }
    }
}
