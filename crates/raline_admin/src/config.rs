//! Environment configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub server_url: Option<String>,
    pub lang: Option<String>,
    /// Directory holding the persistent storage file.
    pub data_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: env_string_opt("RALINE_SERVER_URL"),
            lang: env_string_opt("RALINE_LANG"),
            data_dir: env_string_opt("RALINE_DATA_DIR").map(PathBuf::from),
            timeout: env_secs_opt("RALINE_TIMEOUT_SEC"),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// Positive whole seconds; anything else is ignored.
fn env_secs_opt(key: &str) -> Option<Duration> {
    env_string_opt(key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
