use tokio::sync::RwLock;

use mission_explorer::api::{ApiClient, Credentials};
use mission_explorer::config::ExplorerConfig;
use mission_explorer::session::{SessionStore, SessionUser};

use super::*;

pub(super) struct AppState {
    pub(super) cfg: ExplorerConfig,

    /// Client without credentials; handlers attach per-request credentials.
    pub(super) api: ApiClient,

    pub(super) sessions: RwLock<SessionStore>,
}

impl AppState {
    pub(super) fn new(cfg: ExplorerConfig, api: ApiClient) -> Self {
        let sessions = RwLock::new(SessionStore::new(cfg.session_max_age_secs));
        Self { cfg, api, sessions }
    }
}

/// The logged-in browser session a request was authorized with.
#[derive(Clone, Debug)]
pub(super) struct SessionContext {
    pub(super) user: SessionUser,
}

impl SessionContext {
    /// API client acting with the backend session captured at login.
    pub(super) fn api(&self, state: &AppState) -> ApiClient {
        state.api.with_credentials(self.user.backend_credentials())
    }
}

pub(super) fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}

pub(super) fn browser_credentials(headers: &HeaderMap) -> Credentials {
    Credentials::from_cookie_header(cookie_header(headers))
}

/// Value of cookie `name` in the request, if any.
pub(super) fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    cookie_header(headers)?
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| k.trim() == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

pub(super) type SharedState = Arc<AppState>;
