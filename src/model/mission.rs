use serde::{Deserialize, Serialize};

use super::wire::nullable_string;

/// A recorded robot run, as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub location: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub notes: String,

    #[serde(default)]
    pub was_modified: bool,
}

/// Body of `POST /missions/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMission {
    pub name: String,
    pub date: String,
    pub location: String,
    pub notes: String,
}

/// Entry of `GET /tags/missions/{name}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionRef {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub location: String,
}
