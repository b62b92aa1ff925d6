use serde::{Deserialize, Serialize};

use super::wire::{non_empty_string, nullable_string, optional_url, u64_lenient};
use crate::format;

/// One recorded file of a mission, as served by `/missions/{id}/files/` and
/// `/file/{path}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FileRecord {
    pub file_path: String,

    #[serde(default, rename = "video_path", alias = "video", deserialize_with = "non_empty_string")]
    pub video_path: Option<String>,

    /// Seconds.
    #[serde(deserialize_with = "u64_lenient")]
    pub duration: u64,

    /// Bytes.
    #[serde(deserialize_with = "u64_lenient")]
    pub size: u64,

    #[serde(default, deserialize_with = "nullable_string")]
    pub robot: String,

    #[serde(default, rename = "type", deserialize_with = "non_empty_string")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "optional_url")]
    pub file_url: Option<reqwest::Url>,

    #[serde(default, deserialize_with = "optional_url")]
    pub video_url: Option<reqwest::Url>,
}

/// Column view over the files of one mission, in backend order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MissionDetails {
    pub files: Vec<String>,
    pub videos: Vec<Option<String>>,
    pub durations: Vec<String>,
    pub sizes: Vec<String>,
    pub robots: Vec<String>,
}

impl MissionDetails {
    /// Raw columns: durations in seconds and sizes in bytes, as decimal strings.
    pub fn from_files(files: &[FileRecord]) -> Self {
        let mut out = MissionDetails::default();
        for f in files {
            out.files.push(f.file_path.clone());
            out.videos.push(f.video_path.clone());
            out.durations.push(f.duration.to_string());
            out.sizes.push(f.size.to_string());
            out.robots.push(f.robot.clone());
        }
        out
    }

    /// Same columns with durations as `hh:mm:ss` and sizes as `x.xx KB|MB|GB`.
    pub fn formatted(files: &[FileRecord]) -> Self {
        let mut out = Self::from_files(files);
        out.durations = files
            .iter()
            .map(|f| format::format_duration(f.duration, false))
            .collect();
        out.sizes = files.iter().map(|f| format::format_size(f.size)).collect();
        out
    }
}

pub(crate) fn total_duration_secs(files: &[FileRecord]) -> u64 {
    files.iter().map(|f| f.duration).fold(0u64, u64::saturating_add)
}

pub(crate) fn total_size_bytes(files: &[FileRecord]) -> u64 {
    files.iter().map(|f| f.size).fold(0u64, u64::saturating_add)
}

#[cfg(test)]
#[path = "../tests/model/file_tests.rs"]
mod tests;
