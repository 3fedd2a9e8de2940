//! Run configuration.
//!
//! The only required input is the root directory. Log verbosity is read from
//! the `CALLSCAN_LOG` environment variable using `EnvFilter` directive
//! syntax, e.g. `CALLSCAN_LOG=callscan=debug`.

use std::path::PathBuf;

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "CALLSCAN_LOG";

/// Warnings (per-file parse failures) are shown unless the user asks otherwise.
pub const DEFAULT_LOG_FILTER: &str = "callscan=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory (or single file) to index.
    pub root: PathBuf,
    /// `tracing` filter directives.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Assemble a config from the positional root and the raw log variable.
    pub fn new(root: Option<PathBuf>, log_var: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            root: root.unwrap_or(defaults.root),
            log_filter: log_var
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }

    /// Like [`Config::new`], reading the log filter from the environment.
    pub fn from_env(root: Option<PathBuf>) -> Self {
        Self::new(root, std::env::var(LOG_ENV).ok())
    }
}
