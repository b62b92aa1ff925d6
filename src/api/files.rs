//! Per-mission file listings, single file lookups and their aggregates.

use super::*;
use crate::format;
use crate::model::{MissionFilesPayload, total_duration_secs, total_size_bytes};

impl ApiClient {
    pub async fn mission_files(&self, mission_id: i64) -> Result<Vec<FileRecord>, ApiError> {
        let ctx = ErrorContext::new("fetch files of mission", "details of mission", mission_id);
        let req = self.request(Method::GET, &format!("/missions/{}/files/", mission_id))?;
        let payload: MissionFilesPayload = self.send_json(req, &ctx).await?;
        Ok(payload.into_records())
    }

    pub async fn file(&self, file_path: &str) -> Result<FileRecord, ApiError> {
        let ctx = ErrorContext::new("fetch file", "file", file_path);
        let req = self.request(Method::GET, &format!("/file/{}", encode_path(file_path)))?;
        self.send_json(req, &ctx).await
    }

    /// File columns of a mission with durations and sizes formatted for display.
    pub async fn mission_details(&self, mission_id: i64) -> Result<MissionDetails, ApiError> {
        let files = self.mission_files(mission_id).await?;
        Ok(MissionDetails::formatted(&files))
    }

    pub async fn total_duration(&self, mission_id: i64) -> Result<String, ApiError> {
        let files = self.mission_files(mission_id).await?;
        Ok(format::format_duration(total_duration_secs(&files), false))
    }

    pub async fn total_size(&self, mission_id: i64) -> Result<String, ApiError> {
        let files = self.mission_files(mission_id).await?;
        Ok(format::format_size(total_size_bytes(&files)))
    }

    pub async fn robot_names(&self, mission_id: i64) -> Result<Vec<String>, ApiError> {
        let files = self.mission_files(mission_id).await?;
        Ok(files.into_iter().map(|f| f.robot).collect())
    }
}
