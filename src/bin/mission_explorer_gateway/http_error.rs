use mission_explorer::api::ApiError;

use super::*;

pub(super) fn json_error(status: StatusCode, msg: &str) -> Response {
    (status, Json(serde_json::json!({ "error": msg }))).into_response()
}

pub(super) fn unauthorized() -> Response {
    json_error(StatusCode::UNAUTHORIZED, "unauthorized")
}

pub(super) fn bad_request(msg: &str) -> Response {
    json_error(StatusCode::BAD_REQUEST, msg)
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{:#}", err))
}

/// Backend 404s pass through; every other backend failure is a bad gateway.
pub(super) fn upstream_error(err: &ApiError) -> Response {
    tracing::warn!(error = %err, "backend request failed");
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_GATEWAY
    };
    json_error(status, &err.to_string())
}
