//! Tag vocabulary and mission/tag links.

use super::*;

impl ApiClient {
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let ctx = ErrorContext::new("fetch tags", "tags", "");
        let req = self.request(Method::GET, "/tags/")?;
        self.send_json(req, &ctx).await
    }

    /// Creates a vocabulary entry; without a color the backend default
    /// `#FFFFFF` is sent.
    pub async fn create_tag(&self, name: &str, color: Option<&str>) -> Result<Tag, ApiError> {
        let ctx = ErrorContext::new("create tag", "tag", name).fields("name and color");
        let req = self.request(Method::POST, "/tags/create/")?.json(&serde_json::json!({
            "name": name,
            "color": color.unwrap_or(crate::model::DEFAULT_NEW_TAG_COLOR),
        }));
        self.send_json(req, &ctx).await
    }

    pub async fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag, ApiError> {
        let ctx = ErrorContext::new("rename tag", "tag", name).fields("the tag name");
        let req = self
            .request(Method::PUT, &format!("/tags/{}", encode_name(name)))?
            .json(&serde_json::json!({ "name": new_name }));
        self.send_json(req, &ctx).await
    }

    pub async fn recolor_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError> {
        let ctx = ErrorContext::new("change tag color", "tag", name).fields("the tag name and color");
        let req = self
            .request(Method::PUT, &format!("/tags/{}", encode_name(name)))?
            .json(&serde_json::json!({ "name": name, "color": color }));
        self.send_json(req, &ctx).await
    }

    pub async fn delete_tag(&self, name: &str) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("delete tag", "tag", name);
        let req = self.request(Method::DELETE, &format!("/tags/{}", encode_name(name)))?;
        self.send_empty(req, &ctx).await
    }

    /// Missions currently holding the tag `name`.
    pub async fn missions_by_tag(&self, name: &str) -> Result<Vec<MissionRef>, ApiError> {
        let ctx = ErrorContext::new("fetch missions for tag", "tag", name);
        let req = self.request(Method::GET, &format!("/tags/missions/{}", encode_name(name)))?;
        self.send_json(req, &ctx).await
    }

    /// Links an existing tag to a mission and flags the mission as modified.
    pub async fn add_tag_to_mission(&self, mission_id: i64, tag_name: &str) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("add tag to mission", "mission or tag", format!("{}/{}", mission_id, tag_name))
            .fields("mission_id and tag_name");
        let req = self
            .request(Method::POST, "/mission-tags/create/")?
            .json(&serde_json::json!({ "mission_id": mission_id, "tag_name": tag_name }));
        self.send_empty(req, &ctx).await?;
        self.flag_modified(mission_id).await
    }

    /// Unlinks a tag from a mission and flags the mission as modified. The
    /// tag itself stays in the vocabulary.
    pub async fn remove_tag_from_mission(&self, mission_id: i64, tag_name: &str) -> Result<(), ApiError> {
        let ctx = ErrorContext::new(
            "remove tag from mission",
            "mission, tag or relationship",
            format!("{}/{}", mission_id, tag_name),
        );
        let path = format!("/mission-tags/delete/{}/{}", mission_id, encode_name(tag_name));
        let req = self.request(Method::DELETE, &path)?;
        self.send_empty(req, &ctx).await?;
        self.flag_modified(mission_id).await
    }
}
