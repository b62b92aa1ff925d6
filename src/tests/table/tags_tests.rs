use std::sync::Mutex;

use reqwest::StatusCode;

use super::*;
use crate::api::ErrorContext;
use crate::table::MissionRow;

/// In-memory backend: a vocabulary, mission/tag links and a call log.
#[derive(Default)]
struct FakeBackend {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    tags: Vec<Tag>,
    links: Vec<(i64, String)>,
    calls: Vec<String>,
    fail: Vec<&'static str>,
}

impl FakeBackend {
    fn new(tags: &[&str], links: &[(i64, &str)]) -> Self {
        let state = FakeState {
            tags: tags.iter().map(|t| Tag::new(*t, "#FFFFFF")).collect(),
            links: links.iter().map(|(m, t)| (*m, t.to_string())).collect(),
            ..FakeState::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    fn failing(self, op: &'static str) -> Self {
        self.state.lock().unwrap().fail.push(op);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn tag_names(&self) -> Vec<String> {
        self.state.lock().unwrap().tags.iter().map(|t| t.name.clone()).collect()
    }

    fn record(&self, op: &'static str, arg: &str) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{} {}", op, arg));
        if state.fail.contains(&op) {
            return Err(ErrorContext::new("fake", "tag", arg).status_error(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(state)
    }
}

#[async_trait]
impl TagBackend for FakeBackend {
    async fn create_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError> {
        let mut state = self.record("create", name)?;
        let tag = Tag {
            id: Some(state.tags.len() as i64 + 1),
            name: name.to_string(),
            color: color.to_string(),
        };
        state.tags.push(tag.clone());
        Ok(tag)
    }

    async fn delete_tag(&self, name: &str) -> Result<(), ApiError> {
        let mut state = self.record("delete", name)?;
        state.tags.retain(|t| t.name != name);
        Ok(())
    }

    async fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag, ApiError> {
        let mut state = self.record("rename", name)?;
        for t in state.tags.iter_mut().filter(|t| t.name == name) {
            t.name = new_name.to_string();
        }
        Ok(Tag::new(new_name, "#FFFFFF"))
    }

    async fn recolor_tag(&self, name: &str, color: &str) -> Result<Tag, ApiError> {
        let _state = self.record("recolor", name)?;
        Ok(Tag::new(name, color))
    }

    async fn missions_by_tag(&self, name: &str) -> Result<Vec<MissionRef>, ApiError> {
        let state = self.record("lookup", name)?;
        Ok(state
            .links
            .iter()
            .filter(|(_, t)| t == name)
            .map(|(id, _)| MissionRef {
                id: *id,
                name: String::new(),
                location: String::new(),
            })
            .collect())
    }

    async fn add_tag_to_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError> {
        if self.state.lock().unwrap().fail.contains(&"flag") {
            self.state.lock().unwrap().links.push((mission_id, name.to_string()));
            return Err(ApiError::ModifiedFlag {
                mission_id,
                source: Box::new(ErrorContext::new("flag", "mission", mission_id).status_error(StatusCode::BAD_GATEWAY)),
                updated: None,
            });
        }
        let mut state = self.record("attach", name)?;
        state.links.push((mission_id, name.to_string()));
        Ok(())
    }

    async fn remove_tag_from_mission(&self, mission_id: i64, name: &str) -> Result<(), ApiError> {
        let mut state = self.record("detach", name)?;
        state.links.retain(|(m, t)| !(*m == mission_id && t == name));
        Ok(())
    }
}

fn row(id: i64, tags: &[&str]) -> MissionRow {
    MissionRow {
        id,
        name: format!("mission {}", id),
        location: String::new(),
        date: String::new(),
        notes: String::new(),
        total_duration: "00:00:00".to_string(),
        total_size: "0.00 KB".to_string(),
        robot: String::new(),
        tags: tags.iter().map(|t| Tag::new(*t, "#FFFFFF")).collect(),
    }
}

fn vocabulary(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|t| Tag::new(*t, "#FFFFFF")).collect()
}

fn tag_names(tags: &[Tag]) -> Vec<&str> {
    tags.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test]
async fn removing_the_last_holder_deletes_the_tag() {
    let backend = FakeBackend::new(&["A", "B", "C"], &[(1, "A"), (1, "B")]);
    let mut table = MissionTable::new(vec![row(1, &["A", "B"])], vocabulary(&["A", "B", "C"]));

    let removal = table.remove_tag(&backend, 1, "B").await.unwrap();

    assert!(removal.deleted_from_vocabulary);
    assert!(removal.cleanup_error.is_none());
    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["A"]);
    assert_eq!(tag_names(table.vocabulary()), vec!["A", "C"]);
    assert_eq!(backend.calls(), vec!["detach B", "lookup B", "delete B"]);
}

#[tokio::test]
async fn tags_still_held_elsewhere_stay_in_the_vocabulary() {
    let backend = FakeBackend::new(&["A", "B"], &[(1, "B"), (2, "B")]);
    let mut table = MissionTable::new(vec![row(1, &["A", "B"]), row(2, &["B"])], vocabulary(&["A", "B"]));

    let removal = table.remove_tag(&backend, 1, "B").await.unwrap();

    assert!(!removal.deleted_from_vocabulary);
    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["A"]);
    assert_eq!(tag_names(table.vocabulary()), vec!["A", "B"]);
    assert!(!backend.calls().contains(&"delete B".to_string()));
}

#[tokio::test]
async fn failed_cleanup_does_not_undo_the_detach() {
    let backend = FakeBackend::new(&["B"], &[(1, "B")]).failing("lookup");
    let mut table = MissionTable::new(vec![row(1, &["B"])], vocabulary(&["B"]));

    let removal = table.remove_tag(&backend, 1, "B").await.unwrap();

    assert!(table.row(1).unwrap().tags.is_empty());
    assert_eq!(tag_names(table.vocabulary()), vec!["B"]);
    assert!(removal.cleanup_error.is_some());
}

#[tokio::test]
async fn failed_detach_leaves_local_state_alone() {
    let backend = FakeBackend::new(&["B"], &[(1, "B")]).failing("detach");
    let mut table = MissionTable::new(vec![row(1, &["B"])], vocabulary(&["B"]));

    let err = table.remove_tag(&backend, 1, "B").await.unwrap_err();

    assert!(matches!(err, TagError::Api(_)));
    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["B"]);
    assert_eq!(backend.calls(), vec!["detach B"]);
}

#[tokio::test]
async fn delete_all_sees_earlier_removals() {
    let backend = FakeBackend::new(&["A", "B", "C"], &[(1, "A"), (1, "B"), (2, "B")]);
    let mut table = MissionTable::new(vec![row(1, &["A", "B"]), row(2, &["B"])], vocabulary(&["A", "B", "C"]));

    let removals = table.delete_all_tags(&backend, 1).await.unwrap();

    assert_eq!(removals.len(), 2);
    assert!(removals[0].deleted_from_vocabulary);
    assert!(!removals[1].deleted_from_vocabulary);
    assert!(table.row(1).unwrap().tags.is_empty());
    assert_eq!(tag_names(table.vocabulary()), vec!["B", "C"]);
    assert_eq!(backend.tag_names(), vec!["B", "C"]);
}

#[tokio::test]
async fn new_tags_land_in_mission_and_vocabulary() {
    let backend = FakeBackend::new(&[], &[]);
    let mut table = MissionTable::new(vec![row(1, &[])], vec![]);

    let tag = table.add_new_tag(&backend, 1, "night", "#000080").await.unwrap();

    assert_eq!(tag.color, "#000080");
    assert_eq!(table.row(1).unwrap().tags, vec![tag.clone()]);
    assert_eq!(table.vocabulary(), &[tag][..]);
    assert_eq!(backend.calls(), vec!["create night", "attach night"]);
}

#[tokio::test]
async fn failed_attach_removes_the_created_tag() {
    let backend = FakeBackend::new(&[], &[]).failing("attach");
    let mut table = MissionTable::new(vec![row(1, &[])], vec![]);

    let err = table.add_new_tag(&backend, 1, "night", "#000080").await.unwrap_err();

    assert!(matches!(err, TagError::Api(_)));
    assert!(table.row(1).unwrap().tags.is_empty());
    assert!(table.vocabulary().is_empty());
    assert!(backend.tag_names().is_empty());
}

#[tokio::test]
async fn invalid_new_tags_never_reach_the_backend() {
    let backend = FakeBackend::new(&["outdoor"], &[]);
    let mut table = MissionTable::new(vec![row(1, &["night"])], vocabulary(&["outdoor", "night"]));

    let long = "x".repeat(43);
    assert!(matches!(
        table.add_new_tag(&backend, 1, &long, "#000000").await,
        Err(TagError::InvalidName(_))
    ));
    assert!(matches!(
        table.add_new_tag(&backend, 1, "fresh", "blue").await,
        Err(TagError::InvalidColor(_))
    ));
    assert!(matches!(
        table.add_new_tag(&backend, 1, "outdoor", "#000000").await,
        Err(TagError::ExistingTag(_))
    ));
    assert!(matches!(
        table.add_existing_tag(&backend, 1, "night").await,
        Err(TagError::DuplicateTag(_))
    ));
    assert!(matches!(
        table.add_existing_tag(&backend, 5, "outdoor").await,
        Err(TagError::UnknownMission(5))
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn existing_tags_use_the_vocabulary_color_or_the_fallback() {
    let backend = FakeBackend::new(&["outdoor"], &[]);
    let mut vocab = vocabulary(&["outdoor"]);
    vocab[0].color = "#00FF00".to_string();
    let mut table = MissionTable::new(vec![row(1, &[])], vocab);

    let known = table.add_existing_tag(&backend, 1, "outdoor").await.unwrap();
    let unknown = table.add_existing_tag(&backend, 1, "legacy").await.unwrap();

    assert_eq!(known.color, "#00FF00");
    assert_eq!(unknown.color, FALLBACK_TAG_COLOR);
    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["outdoor", "legacy"]);
    assert_eq!(tag_names(table.vocabulary()), vec!["outdoor"]);
}

#[tokio::test]
async fn flag_failure_still_folds_the_attach() {
    let backend = FakeBackend::new(&["outdoor"], &[]).failing("flag");
    let mut table = MissionTable::new(vec![row(1, &[])], vocabulary(&["outdoor"]));

    let err = table.add_existing_tag(&backend, 1, "outdoor").await.unwrap_err();

    assert!(matches!(err, TagError::Api(ApiError::ModifiedFlag { mission_id: 1, .. })));
    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["outdoor"]);
}

#[tokio::test]
async fn rename_propagates_to_every_occurrence() {
    let backend = FakeBackend::new(&["old", "other"], &[(1, "old"), (2, "old")]);
    let mut table = MissionTable::new(
        vec![row(1, &["old"]), row(2, &["other", "old"])],
        vocabulary(&["old", "other"]),
    );

    table.rename_tag(&backend, "old", "new").await.unwrap();

    assert_eq!(tag_names(&table.row(1).unwrap().tags), vec!["new"]);
    assert_eq!(tag_names(&table.row(2).unwrap().tags), vec!["other", "new"]);
    assert_eq!(tag_names(table.vocabulary()), vec!["new", "other"]);

    let err = table.rename_tag(&backend, "new", "other").await.unwrap_err();
    assert!(matches!(err, TagError::DuplicateTag(name) if name == "other"));
}

#[tokio::test]
async fn recolor_rejects_non_hex_colors_without_calling_the_backend() {
    let backend = FakeBackend::new(&["A"], &[(1, "A")]);
    let mut table = MissionTable::new(vec![row(1, &["A"])], vocabulary(&["A"]));

    let err = table.recolor_tag(&backend, "A", "red").await.unwrap_err();
    assert!(matches!(err, TagError::InvalidColor(_)));
    assert!(backend.calls().is_empty());
    assert_eq!(table.row(1).unwrap().tags[0].color, "#FFFFFF");

    table.recolor_tag(&backend, "A", "#123ABC").await.unwrap();
    assert_eq!(table.row(1).unwrap().tags[0].color, "#123ABC");
    assert_eq!(table.vocabulary()[0].color, "#123ABC");
}
