use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue};

use super::ApiError;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const SESSION_COOKIE: &str = "sessionid";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Backend credentials attached to outbound requests.
///
/// Built from whatever cookie header the caller has (a browser request, a
/// stored session); with no cookie header the client simply sends none.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub csrf_token: Option<String>,
    pub session_id: Option<String>,
}

impl Credentials {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(csrf_token: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            csrf_token: Some(csrf_token.into()),
            session_id: Some(session_id.into()),
        }
    }

    /// Reads `csrftoken` and `sessionid` out of a `Cookie` header value.
    /// Empty values are ignored.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::none();
        };

        let mut out = Self::none();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name.trim() {
                CSRF_COOKIE => out.csrf_token = Some(value.to_string()),
                SESSION_COOKIE => out.session_id = Some(value.to_string()),
                _ => {}
            }
        }
        out
    }

    /// True when both cookies of a backend session are known.
    pub fn has_session(&self) -> bool {
        self.csrf_token.is_some() && self.session_id.is_some()
    }

    /// `sessionid=<sid>; csrftoken=<token>` built from the values present.
    pub fn cookie_header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(sid) = &self.session_id {
            parts.push(format!("{}={}", SESSION_COOKIE, sid));
        }
        if let Some(token) = &self.csrf_token {
            parts.push(format!("{}={}", CSRF_COOKIE, token));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("csrf_token", &mask(&self.csrf_token))
            .field("session_id", &mask(&self.session_id))
            .finish()
    }
}

/// Headers shared by every API call: JSON content type, the CSRF header when
/// a token is known, and the backend session cookies.
pub fn build_headers(credentials: &Credentials) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = &credentials.csrf_token {
        let value = HeaderValue::from_str(token).map_err(|_| ApiError::InvalidHeader(CSRF_HEADER))?;
        headers.insert(HeaderName::from_static("x-csrftoken"), value);
    }
    if let Some(cookie) = credentials.cookie_header() {
        let value = HeaderValue::from_str(&cookie).map_err(|_| ApiError::InvalidHeader("Cookie"))?;
        headers.insert(COOKIE, value);
    }
    Ok(headers)
}

#[cfg(test)]
#[path = "../tests/api/credentials_tests.rs"]
mod tests;
