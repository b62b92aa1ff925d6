use axum::extract::Path;

use mission_explorer::api::{ApiClient, ApiError};
use mission_explorer::table::{MissionRow, MissionTable, SortKey, TopicSortKey, TopicTable};

use super::*;

#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct MissionsQuery {
    #[serde(default)]
    sort: Option<String>,

    #[serde(default)]
    reversed: bool,

    #[serde(default)]
    search: String,
}

/// Loads every mission with its tags and file aggregates.
async fn load_table(api: &ApiClient) -> Result<MissionTable, ApiError> {
    let missions = api.list_missions().await?;
    let vocabulary = api.list_tags().await?;

    let mut rows = Vec::with_capacity(missions.len());
    for mission in &missions {
        let tags = api.mission_tags(mission.id).await?;
        let files = api.mission_files(mission.id).await?;
        rows.push(MissionRow::from_parts(mission, tags, &files));
    }
    Ok(MissionTable::new(rows, vocabulary))
}

pub(super) async fn list_missions(
    State(state): State<SharedState>,
    Extension(ctx): Extension<SessionContext>,
    Query(q): Query<MissionsQuery>,
) -> Response {
    let sort = match q.sort.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => match SortKey::parse(s) {
            Some(key) => Some(key),
            None => return bad_request(&format!("unknown sort key {:?}", s)),
        },
    };

    let mut table = match load_table(&ctx.api(&state)).await {
        Ok(table) => table,
        Err(err) => return upstream_error(&err),
    };
    table.sort(sort, q.reversed);
    table.set_search(q.search);
    Json(table.visible()).into_response()
}

pub(super) async fn mission_details(
    State(state): State<SharedState>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<i64>,
) -> Response {
    match ctx.api(&state).mission_details(id).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => upstream_error(&err),
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct TopicsQuery {
    file: String,

    #[serde(default)]
    sort: Option<String>,

    #[serde(default)]
    reversed: bool,

    #[serde(default)]
    search: String,
}

/// Topics of one recorded file, sorted and filtered like the mission list.
pub(super) async fn list_topics(
    State(state): State<SharedState>,
    Extension(ctx): Extension<SessionContext>,
    Query(q): Query<TopicsQuery>,
) -> Response {
    if q.file.trim().is_empty() {
        return bad_request("file is required");
    }
    let sort = match q.sort.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => match TopicSortKey::parse(s) {
            Some(key) => Some(key),
            None => return bad_request(&format!("unknown sort key {:?}", s)),
        },
    };

    let topics = match ctx.api(&state).topics_by_file(&q.file).await {
        Ok(topics) => topics,
        Err(err) => return upstream_error(&err),
    };
    let mut table = TopicTable::new(topics);
    table.sort(sort, q.reversed);
    table.set_search(q.search);
    Json(table.visible()).into_response()
}
