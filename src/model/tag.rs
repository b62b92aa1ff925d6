use serde::{Deserialize, Serialize};

/// Backend column limit for tag names.
pub const MAX_TAG_NAME_LEN: usize = 42;

/// Color used when a tag is attached by name but is missing from the local
/// vocabulary.
pub const FALLBACK_TAG_COLOR: &str = "#000000";

/// Color the backend assigns when a tag is created without one.
pub const DEFAULT_NEW_TAG_COLOR: &str = "#FFFFFF";

/// A label from the global vocabulary. `name` is the identity; the numeric
/// id is carried only when the backend sends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }
}
