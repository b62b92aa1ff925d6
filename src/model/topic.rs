use serde::{Deserialize, Serialize};

use super::wire::{non_empty_string, optional_url, url_as_str};

/// A recorded topic inside one file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message_count: u64,
    pub frequency: f64,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "non_empty_string")]
    pub video_path: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "url_as_str",
        deserialize_with = "optional_url"
    )]
    pub video_url: Option<reqwest::Url>,
}

impl Topic {
    pub fn has_video(&self) -> bool {
        self.video_url.is_some() || self.video_path.is_some()
    }
}

/// Entry of the `topics-names` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicName {
    pub name: String,
}
