use async_trait::async_trait;
use thiserror::Error;

use super::MissionTable;
use crate::api::{ApiClient, ApiError};
use crate::format::is_hex_color;
use crate::model::{FALLBACK_TAG_COLOR, MAX_TAG_NAME_LEN, MissionRef, Tag};

#[derive(Debug, Error)]
pub enum TagError {
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid tag name {0:?}: names must be 1 to 42 characters")]
    InvalidName(String),

    #[error("tag \"{0}\" is already in use")]
    DuplicateTag(String),

    #[error("tag \"{0}\" already exists; attach the existing tag instead")]
    ExistingTag(String),

    #[error("mission {0} is not loaded")]
    UnknownMission(i64),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Backend calls the tag editor needs.
#[async_trait]
pub trait TagBackend: Send + Sync {
    async fn create_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError>;
    async fn delete_tag(&self, name: &str) -> Result<(), ApiError>;
    async fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag, ApiError>;
    async fn recolor_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError>;
    async fn missions_by_tag(&self, name: &str) -> Result<Vec<MissionRef>, ApiError>;
    async fn add_tag_to_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError>;
    async fn remove_tag_from_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl TagBackend for ApiClient {
    async fn create_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError> {
        ApiClient::create_tag(self, name, Some(color)).await
    }

    async fn delete_tag(&self, name: &str) -> Result<(), ApiError> {
        ApiClient::delete_tag(self, name).await
    }

    async fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag, ApiError> {
        ApiClient::rename_tag(self, name, new_name).await
    }

    async fn recolor_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError> {
        ApiClient::recolor_tag(self, name, color).await
    }

    async fn missions_by_tag(&self, name: &str) -> Result<Vec<MissionRef>, ApiError> {
        ApiClient::missions_by_tag(self, name).await
    }

    async fn add_tag_to_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError> {
        ApiClient::add_tag_to_mission(self, mission_id, name).await
    }

    async fn remove_tag_from_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError> {
        ApiClient::remove_tag_from_mission(self, mission_id, name).await
    }
}

/// What [`MissionTable::remove_tag`] did besides detaching the tag.
#[derive(Debug)]
pub struct TagRemoval {
    pub name: String,
    /// The tag had no missions left and was deleted from the vocabulary.
    pub deleted_from_vocabulary: bool,
    /// The orphan lookup or delete failed; the tag stays in the vocabulary.
    pub cleanup_error: Option<ApiError>,
    /// The tag was detached but the mission could not be flagged as modified.
    pub flag_error: Option<ApiError>,
}

fn validate_name(name: &str) -> Result<(), TagError> {
    let len = name.chars().count();
    if name.trim().is_empty() || len > MAX_TAG_NAME_LEN {
        return Err(TagError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Splits a mission mutation result: a failed modified flag means the
/// mutation itself went through.
fn applied(result: Result<(), ApiError>) -> Result<Option<ApiError>, TagError> {
    match result {
        Ok(()) => Ok(None),
        Err(err @ ApiError::ModifiedFlag { .. }) => Ok(Some(err)),
        Err(err) => Err(err.into()),
    }
}

impl MissionTable {
    /// Creates `name` in the vocabulary and attaches it to the mission.
    ///
    /// If attaching fails, the freshly created tag is deleted again so the
    /// vocabulary does not gain an orphan.
    pub async fn add_new_tag<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        mission_id: i64,
        name: &str,
        color: &str,
    ) -> Result<Tag, TagError> {
        validate_name(name)?;
        if !is_hex_color(color) {
            return Err(TagError::InvalidColor(color.to_string()));
        }
        let row = self.row(mission_id).ok_or(TagError::UnknownMission(mission_id))?;
        if row.has_tag(name) {
            return Err(TagError::DuplicateTag(name.to_string()));
        }
        if self.vocabulary_tag(name).is_some() {
            return Err(TagError::ExistingTag(name.to_string()));
        }

        let created = backend.create_tag(name, color).await?;
        let flag_error = match applied(backend.add_tag_to_mission(mission_id, name).await) {
            Ok(flag_error) => flag_error,
            Err(err) => {
                if let Err(cleanup) = backend.delete_tag(name).await {
                    tracing::warn!(tag = name, error = %cleanup, "could not delete unattached tag");
                }
                return Err(err);
            }
        };

        let tag = Tag {
            id: created.id,
            name: name.to_string(),
            color: color.to_string(),
        };
        self.vocabulary.push(tag.clone());
        if let Some(row) = self.row_mut(mission_id) {
            row.tags.push(tag.clone());
        }
        match flag_error {
            Some(err) => Err(err.into()),
            None => Ok(tag),
        }
    }

    /// Attaches a vocabulary tag to the mission. Tags missing from the local
    /// vocabulary get [`FALLBACK_TAG_COLOR`].
    pub async fn add_existing_tag<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        mission_id: i64,
        name: &str,
    ) -> Result<Tag, TagError> {
        validate_name(name)?;
        let row = self.row(mission_id).ok_or(TagError::UnknownMission(mission_id))?;
        if row.has_tag(name) {
            return Err(TagError::DuplicateTag(name.to_string()));
        }
        let tag = self
            .vocabulary_tag(name)
            .cloned()
            .unwrap_or_else(|| Tag::new(name, FALLBACK_TAG_COLOR));

        let flag_error = applied(backend.add_tag_to_mission(mission_id, name).await)?;

        if let Some(row) = self.row_mut(mission_id) {
            row.tags.push(tag.clone());
        }
        match flag_error {
            Some(err) => Err(err.into()),
            None => Ok(tag),
        }
    }

    /// Detaches `name` from the mission, then deletes it from the vocabulary
    /// when no mission holds it any more. Cleanup failures do not undo the
    /// detach; they are reported in the returned [`TagRemoval`].
    pub async fn remove_tag<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        mission_id: i64,
        name: &str,
    ) -> Result<TagRemoval, TagError> {
        if self.row(mission_id).is_none() {
            return Err(TagError::UnknownMission(mission_id));
        }

        let flag_error = applied(backend.remove_tag_from_mission(mission_id, name).await)?;
        if let Some(row) = self.row_mut(mission_id) {
            row.tags.retain(|t| t.name != name);
        }

        let mut removal = TagRemoval {
            name: name.to_string(),
            deleted_from_vocabulary: false,
            cleanup_error: None,
            flag_error,
        };

        let cleanup = match backend.missions_by_tag(name).await {
            Ok(holders) if holders.is_empty() => backend.delete_tag(name).await.map(|()| true),
            Ok(_) => Ok(false),
            Err(err) => Err(err),
        };
        match cleanup {
            Ok(deleted) => removal.deleted_from_vocabulary = deleted,
            Err(err) => {
                tracing::warn!(tag = name, error = %err, "orphan tag cleanup failed");
                removal.cleanup_error = Some(err);
            }
        }

        if removal.deleted_from_vocabulary {
            self.vocabulary.retain(|t| t.name != name);
        }
        Ok(removal)
    }

    /// Renames a vocabulary tag and every local occurrence of it.
    pub async fn rename_tag<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        name: &str,
        new_name: &str,
    ) -> Result<(), TagError> {
        validate_name(new_name)?;
        if name == new_name {
            return Ok(());
        }
        if self.vocabulary_tag(new_name).is_some() {
            return Err(TagError::DuplicateTag(new_name.to_string()));
        }

        backend.rename_tag(name, new_name).await?;

        self.for_each_tag_named(name, |t| t.name = new_name.to_string());
        Ok(())
    }

    /// Changes the color of a tag everywhere. Anything but `#RRGGBB` is
    /// rejected before the backend is called.
    pub async fn recolor_tag<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        name: &str,
        color: &str,
    ) -> Result<(), TagError> {
        if !is_hex_color(color) {
            return Err(TagError::InvalidColor(color.to_string()));
        }

        backend.recolor_tag(name, color).await?;

        self.for_each_tag_named(name, |t| t.color = color.to_string());
        Ok(())
    }

    /// Removes every tag of the mission, one after another, each with the
    /// orphan cleanup of [`MissionTable::remove_tag`]. Stops at the first
    /// failed detach; removals before it stay applied.
    pub async fn delete_all_tags<B: TagBackend + ?Sized>(
        &mut self,
        backend: &B,
        mission_id: i64,
    ) -> Result<Vec<TagRemoval>, TagError> {
        let names: Vec<String> = self
            .row(mission_id)
            .ok_or(TagError::UnknownMission(mission_id))?
            .tags
            .iter()
            .map(|t| t.name.clone())
            .collect();

        let mut out = Vec::with_capacity(names.len());
        for name in names {
            out.push(self.remove_tag(backend, mission_id, &name).await?);
        }
        Ok(out)
    }

    fn for_each_tag_named(&mut self, name: &str, mut f: impl FnMut(&mut Tag)) {
        let rows = self.rows.iter_mut().flat_map(|r| r.tags.iter_mut());
        for tag in rows.chain(self.vocabulary.iter_mut()) {
            if tag.name == name {
                f(tag);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/table/tags_tests.rs"]
mod tests;
