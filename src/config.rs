//! Runtime configuration read from environment variables.

use std::env;

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "TUI_2048_LOG";
pub const ENV_NO_ANIMATION: &str = "TUI_2048_NO_ANIMATION";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed seed for reproducible sessions; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Where tracing output goes; `None` disables logging.
    pub log_path: Option<String>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
    pub animate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            animate: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (tests use a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty(ENV_SEED).and_then(|s| s.parse().ok());
        let log_path = non_empty(ENV_LOG_PATH);
        let log_filter = non_empty(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let animate = !non_empty(ENV_NO_ANIMATION)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            log_path,
            log_filter,
            animate,
        }
    }
}
