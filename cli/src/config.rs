//! CLI configuration resolved from flags and environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use auth::login::LOGIN_ENDPOINT_PATH;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";
pub const FALLBACK_SESSION_FILE: &str = ".store-rating-session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// API base URL without a trailing slash.
    pub base_url: String,
    pub session_file: PathBuf,
    pub login_timeout: Duration,
}

impl CliConfig {
    /// Build config from parsed flags.
    ///
    /// A missing session file path falls back to [`default_session_file`]; a
    /// zero timeout is raised to one second so a login can never hang.
    #[must_use]
    pub fn new(base_url: &str, session_file: Option<PathBuf>, login_timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            session_file: session_file.unwrap_or_else(default_session_file),
            login_timeout: Duration::from_secs(login_timeout_secs.max(1)),
        }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_ENDPOINT_PATH}", self.base_url)
    }
}

/// `<config dir>/store-rating/session.json`, or a file in the working
/// directory when the platform has no config dir.
#[must_use]
pub fn default_session_file() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(FALLBACK_SESSION_FILE),
        |dir| dir.join("store-rating").join("session.json"),
    )
}
