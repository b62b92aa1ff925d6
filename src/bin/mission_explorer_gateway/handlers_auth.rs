use axum::Form;
use axum::http::HeaderValue;

use mission_explorer::api::LoginOutcome;
use mission_explorer::session::{
    SessionUser, clear_session_cookie, expire_cookies, login_flow, logout_flow, session_cookie,
};

use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginForm {
    username: String,
    password: String,
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(v) => {
            headers.append(header::SET_COOKIE, v);
        }
        Err(_) => tracing::warn!("dropping cookie that is not a valid header value"),
    }
}

pub(super) async fn login(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let browser = browser_credentials(&headers);
    let outcome = match login_flow(&state.api, &browser, &form.username, &form.password).await {
        Ok(outcome) => outcome,
        Err(err) => return upstream_error(&err),
    };

    let session = match outcome {
        LoginOutcome::Authenticated(session) => session,
        LoginOutcome::Rejected { status } => {
            tracing::info!(username = %form.username, status, "login rejected");
            return json_error(StatusCode::UNAUTHORIZED, "Invalid username or password");
        }
    };

    let user = SessionUser {
        username: session.username,
        backend_cookies: session.cookies,
    };
    let id = {
        let mut sessions = state.sessions.write().await;
        sessions.purge_expired();
        match sessions.create(user.clone()) {
            Ok(id) => id,
            Err(err) => return internal_error(err.into()),
        }
    };
    tracing::info!(username = %user.username, "logged in");

    let mut out = HeaderMap::new();
    append_set_cookie(
        &mut out,
        &session_cookie(
            &state.cfg.session_cookie_name,
            &id,
            state.cfg.session_max_age_secs,
            state.cfg.secure_cookies,
        ),
    );
    for cookie in &user.backend_cookies {
        append_set_cookie(&mut out, cookie);
    }
    (
        StatusCode::OK,
        out,
        Json(serde_json::json!({ "username": user.username })),
    )
        .into_response()
}

/// Always clears the session cookie and destroys the local session, even
/// when the backend refuses the logout.
pub(super) async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let browser = browser_credentials(&headers);
    let name = &state.cfg.session_cookie_name;
    let user = match cookie_value(&headers, name) {
        Some(id) => state.sessions.write().await.remove(id),
        None => None,
    };

    let mut out = HeaderMap::new();
    append_set_cookie(&mut out, &clear_session_cookie(name));

    let Some(user) = user else {
        return (StatusCode::OK, out, Json(serde_json::json!({ "ok": true }))).into_response();
    };

    match logout_flow(&state.api, &browser, &user).await {
        Ok(expired) => {
            for cookie in &expired {
                append_set_cookie(&mut out, cookie);
            }
            tracing::info!(username = %user.username, "logged out");
            (StatusCode::OK, out, Json(serde_json::json!({ "ok": true }))).into_response()
        }
        Err(err) => {
            for cookie in &expire_cookies(&user.backend_cookies) {
                append_set_cookie(&mut out, cookie);
            }
            tracing::warn!(username = %user.username, error = %err, "backend logout failed");
            (
                StatusCode::BAD_GATEWAY,
                out,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
