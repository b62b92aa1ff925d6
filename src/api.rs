//! Authenticated request pipeline for the mission database API.
//!
//! Every call goes through [`ApiClient`], which carries an immutable
//! [`Credentials`] value. Attaching different credentials produces a new
//! client; nothing is shared or mutated between requests.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::ExplorerConfig;
use crate::model::{FileRecord, Mission, MissionDetails, MissionRef, NewMission, Tag, Topic, TopicName};

mod credentials;
pub use self::credentials::{CSRF_COOKIE, CSRF_HEADER, Credentials, SESSION_COOKIE, build_headers};

mod encode;
pub use self::encode::{encode_component, encode_name, encode_path};

mod error;
pub use self::error::{ApiError, ErrorContext};

mod http_client;

mod auth;
pub use self::auth::{LoginOutcome, LoginSession};

mod files;
mod missions;
mod tags;
mod topics;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Credentials,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| ApiError::Network {
                operation: "build http client",
                source,
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Credentials::none(),
            client,
        })
    }

    pub fn from_config(cfg: &ExplorerConfig) -> Result<Self, ApiError> {
        Self::new(&cfg.api_base_url, &cfg.user_agent)
    }

    /// A client sharing this one's connection pool but sending `credentials`.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            base_url: self.base_url.clone(),
            credentials,
            client: self.client.clone(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
