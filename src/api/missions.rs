//! Mission CRUD and the modified flag.

use super::*;

const MISSION_FIELDS: &str = "name, date, location and notes";

impl ApiClient {
    pub async fn list_missions(&self) -> Result<Vec<Mission>, ApiError> {
        let ctx = ErrorContext::new("fetch missions", "missions", "");
        let req = self.request(Method::GET, "/missions/")?;
        self.send_json(req, &ctx).await
    }

    pub async fn create_mission(&self, mission: &NewMission) -> Result<Mission, ApiError> {
        let ctx = ErrorContext::new("create mission", "mission", &mission.name).fields(MISSION_FIELDS);
        let req = self.request(Method::POST, "/missions/create/")?.json(mission);
        self.send_json(req, &ctx).await
    }

    pub async fn get_mission(&self, id: i64) -> Result<Mission, ApiError> {
        let ctx = ErrorContext::new("fetch mission", "mission", id);
        let req = self.request(Method::GET, &format!("/missions/{}", id))?;
        self.send_json(req, &ctx).await
    }

    /// Saves every editable field of `mission`, then flags it as modified.
    /// The flag is only sent once the update itself succeeded.
    pub async fn update_mission(&self, mission: &Mission) -> Result<Mission, ApiError> {
        let ctx = ErrorContext::new("update mission", "mission", mission.id).fields(MISSION_FIELDS);
        let req = self
            .request(Method::PUT, &format!("/missions/{}", mission.id))?
            .json(mission);
        let updated: Mission = self.send_json(req, &ctx).await?;
        match self.flag_modified(mission.id).await {
            Ok(()) => Ok(updated),
            Err(ApiError::ModifiedFlag { mission_id, source, .. }) => Err(ApiError::ModifiedFlag {
                mission_id,
                source,
                updated: Some(Box::new(updated)),
            }),
            Err(err) => Err(err),
        }
    }

    pub async fn delete_mission(&self, id: i64) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("delete mission", "mission", id);
        let req = self.request(Method::DELETE, &format!("/missions/{}", id))?;
        self.send_empty(req, &ctx).await
    }

    pub async fn set_was_modified(&self, id: i64, was_modified: bool) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("flag mission as modified", "mission", id).fields("was_modified");
        let req = self
            .request(Method::PUT, &format!("/missions/{}/was_modified", id))?
            .json(&serde_json::json!({ "was_modified": was_modified }));
        self.send_empty(req, &ctx).await
    }

    pub async fn mission_tags(&self, id: i64) -> Result<Vec<Tag>, ApiError> {
        let ctx = ErrorContext::new("fetch tags of mission", "mission", id);
        let req = self.request(Method::GET, &format!("/missions/tags/{}", id))?;
        self.send_json(req, &ctx).await
    }

    /// Runs after a confirmed mission mutation; a failing flag call is
    /// reported on its own so callers know the mutation itself went through.
    pub(super) async fn flag_modified(&self, mission_id: i64) -> Result<(), ApiError> {
        self.set_was_modified(mission_id, true)
            .await
            .map_err(|err| ApiError::ModifiedFlag {
                mission_id,
                source: Box::new(err),
                updated: None,
            })
    }
}
