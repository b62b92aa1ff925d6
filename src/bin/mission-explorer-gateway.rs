//! HTTP gateway in front of the mission database API: owns browser
//! sessions, replays backend cookies, and serves the mission table.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

#[path = "mission_explorer_gateway/state.rs"]
mod state;
use self::state::*;
#[path = "mission_explorer_gateway/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "mission_explorer_gateway/handlers_auth.rs"]
mod handlers_auth;
use self::handlers_auth::*;
#[path = "mission_explorer_gateway/handlers_missions.rs"]
mod handlers_missions;
use self::handlers_missions::*;
#[path = "mission_explorer_gateway/routes.rs"]
mod routes;
use self::routes::*;
#[path = "mission_explorer_gateway/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
