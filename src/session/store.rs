use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::api::Credentials;

use super::credentials_from_set_cookies;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not generate a session id: {0}")]
    Entropy(getrandom::Error),
}

/// The logged-in user as the gateway remembers it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub username: String,
    /// `Set-Cookie` values captured from the backend login response.
    #[serde(skip)]
    pub backend_cookies: Vec<String>,
}

impl SessionUser {
    pub fn backend_credentials(&self) -> Credentials {
        credentials_from_set_cookies(&self.backend_cookies)
    }
}

#[derive(Debug)]
struct Entry {
    user: SessionUser,
    expires_at: OffsetDateTime,
}

/// In-memory sessions keyed by the hash of their id. Raw ids only ever live
/// in the browser cookie.
#[derive(Debug)]
pub struct SessionStore {
    max_age: Duration,
    entries: HashMap<String, Entry>,
}

fn hash_session_id(id: &str) -> String {
    blake3::hash(id.as_bytes()).to_hex().to_string()
}

fn generate_session_id() -> Result<String, SessionError> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(SessionError::Entropy)?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

impl SessionStore {
    pub fn new(max_age_secs: u64) -> Self {
        Self {
            max_age: Duration::seconds(i64::try_from(max_age_secs).unwrap_or(i64::MAX)),
            entries: HashMap::new(),
        }
    }

    /// Stores `user` and returns the new raw session id.
    pub fn create(&mut self, user: SessionUser) -> Result<String, SessionError> {
        self.create_at(user, OffsetDateTime::now_utc())
    }

    fn create_at(&mut self, user: SessionUser, now: OffsetDateTime) -> Result<String, SessionError> {
        let id = generate_session_id()?;
        let expires_at = now
            .checked_add(self.max_age)
            .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc());
        self.entries
            .insert(hash_session_id(&id), Entry { user, expires_at });
        Ok(id)
    }

    /// The live session for `id`; expired sessions read as absent.
    pub fn get(&self, id: &str) -> Option<&SessionUser> {
        self.get_at(id, OffsetDateTime::now_utc())
    }

    fn get_at(&self, id: &str, now: OffsetDateTime) -> Option<&SessionUser> {
        self.entries
            .get(&hash_session_id(id))
            .filter(|e| e.expires_at > now)
            .map(|e| &e.user)
    }

    pub fn remove(&mut self, id: &str) -> Option<SessionUser> {
        self.entries.remove(&hash_session_id(id)).map(|e| e.user)
    }

    /// Drops expired sessions and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(OffsetDateTime::now_utc())
    }

    fn purge_expired_at(&mut self, now: OffsetDateTime) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.expires_at > now);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/session/store_tests.rs"]
mod tests;
