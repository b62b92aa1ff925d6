use axum::Router;
use axum::middleware::{self, Next};
use axum::routing::{get, post};

use super::*;

pub(super) fn build_router(state: SharedState) -> Router {
    let authed = Router::new()
        .route("/missions", get(list_missions))
        .route("/missions/:id/details", get(mission_details))
        .route("/topics", get(list_topics))
        .layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(authed)
        .with_state(state)
}

async fn require_session(
    State(state): State<SharedState>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(id) = cookie_value(req.headers(), &state.cfg.session_cookie_name).map(str::to_string)
    else {
        return unauthorized();
    };

    let user = {
        let sessions = state.sessions.read().await;
        sessions.get(&id).cloned()
    };
    let Some(user) = user else {
        return unauthorized();
    };

    req.extensions_mut().insert(SessionContext { user });
    next.run(req).await
}
