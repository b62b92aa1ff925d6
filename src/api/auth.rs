//! Login/logout against the backend session endpoints.

use reqwest::header::SET_COOKIE;

use super::*;

/// Result of a login attempt. A refused login is a value, not an error, so
/// callers can show it inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(LoginSession),
    Rejected { status: u16 },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }
}

/// What a successful login hands to the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSession {
    pub username: String,
    /// Every `Set-Cookie` value of the login response, in response order.
    pub cookies: Vec<String>,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let ctx = ErrorContext::new("log in", "login endpoint", "");
        let resp = self
            .request(Method::POST, "/auth/login/")?
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .map_err(|source| ApiError::Network {
                operation: ctx.operation,
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "login rejected");
            return Ok(LoginOutcome::Rejected {
                status: status.as_u16(),
            });
        }

        let cookies = collect_set_cookies(resp.headers());
        tracing::info!(cookies = cookies.len(), "login accepted");
        Ok(LoginOutcome::Authenticated(LoginSession {
            username: username.to_string(),
            cookies,
        }))
    }

    /// Ends the backend session identified by `csrf_token`/`session_id`,
    /// regardless of the credentials this client carries.
    pub async fn logout(&self, csrf_token: &str, session_id: &str) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("log out", "session", "");
        let session = Credentials::new(csrf_token, session_id);
        let req = self.request_as(Method::POST, "/auth/logout/", &session)?;
        self.send_empty(req, &ctx).await
    }
}

fn collect_set_cookies(headers: &reqwest::header::HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect()
}
