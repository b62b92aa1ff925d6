use super::{SessionUser, expire_cookies};
use crate::api::{ApiClient, ApiError, Credentials, LoginOutcome};

/// Logs in, first ending any backend session the browser still carries.
/// A failing stale logout is logged and otherwise ignored.
pub async fn login_flow(
    client: &ApiClient,
    browser: &Credentials,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, ApiError> {
    if let (Some(csrf), Some(sid)) = (&browser.csrf_token, &browser.session_id) {
        match client.logout(csrf, sid).await {
            Ok(()) => tracing::debug!("ended stale backend session before login"),
            Err(err) => tracing::warn!(error = %err, "stale backend session logout failed"),
        }
    }
    client.login(username, password).await
}

/// Ends the backend session of `user` and returns the expired replacements
/// of the cookies captured at login.
///
/// The captured backend cookies take precedence over the browser's; without
/// a complete pair there is no backend session to end.
pub async fn logout_flow(
    client: &ApiClient,
    browser: &Credentials,
    user: &SessionUser,
) -> Result<Vec<String>, ApiError> {
    let captured = user.backend_credentials();
    let csrf = captured.csrf_token.as_ref().or(browser.csrf_token.as_ref());
    let sid = captured.session_id.as_ref().or(browser.session_id.as_ref());

    match (csrf, sid) {
        (Some(csrf), Some(sid)) => client.logout(csrf, sid).await?,
        _ => tracing::debug!(username = %user.username, "no backend session to end"),
    }
    Ok(expire_cookies(&user.backend_cookies))
}
