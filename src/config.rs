use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_session_cookie_name() -> String {
    "_session".to_string()
}

fn default_session_max_age_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    "mission-explorer".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Root of the mission database REST API, e.g. `http://localhost:8000/restapi`.
    pub api_base_url: String,

    /// Name of the application session cookie.
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,

    /// Lifetime of a login session, in seconds.
    #[serde(default = "default_session_max_age_secs")]
    pub session_max_age_secs: u64,

    /// Mark the application session cookie `Secure`.
    #[serde(default)]
    pub secure_cookies: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ExplorerConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            session_cookie_name: default_session_cookie_name(),
            session_max_age_secs: default_session_max_age_secs(),
            secure_cookies: false,
            user_agent: default_user_agent(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: ExplorerConfig =
            serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        cfg.validated()
    }

    /// Checks the values and normalizes the base URL (no trailing `/`).
    pub fn validated(mut self) -> Result<Self> {
        let url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("api_base_url must start with http:// or https:// (got {:?})", url);
        }
        if self.session_max_age_secs == 0 {
            anyhow::bail!("session_max_age_secs must be greater than zero");
        }
        if self.session_cookie_name.is_empty()
            || !self
                .session_cookie_name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            anyhow::bail!("invalid session cookie name {:?}", self.session_cookie_name);
        }
        self.api_base_url = url;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
