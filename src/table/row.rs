use serde::Serialize;

use crate::format;
use crate::model::{FileRecord, Mission, Tag, total_duration_secs, total_size_bytes};

/// One line of the mission table: the mission's own columns plus values
/// derived from its files.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissionRow {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub date: String,
    pub notes: String,
    pub total_duration: String,
    pub total_size: String,
    pub robot: String,
    pub tags: Vec<Tag>,
}

impl MissionRow {
    pub fn from_parts(mission: &Mission, tags: Vec<Tag>, files: &[FileRecord]) -> Self {
        let robots: Vec<&str> = files.iter().map(|f| f.robot.as_str()).collect();
        Self {
            id: mission.id,
            name: mission.name.clone(),
            location: mission.location.clone(),
            date: mission.date.clone(),
            notes: mission.notes.clone(),
            total_duration: format::format_duration(total_duration_secs(files), false),
            total_size: format::format_size(total_size_bytes(files)),
            robot: format::format_robot_names(&robots, true),
            tags,
        }
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Text columns the search query is matched against.
    pub(super) fn text_columns(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.location.as_str(),
            self.date.as_str(),
            self.notes.as_str(),
            self.total_duration.as_str(),
            self.total_size.as_str(),
            self.robot.as_str(),
        ]
    }
}
