use super::*;
use crate::model::{FileRecord, Mission};

fn mission(id: i64, name: &str) -> Mission {
    Mission {
        id,
        name: name.to_string(),
        date: "2024-05-01".to_string(),
        location: "Zurich".to_string(),
        notes: String::new(),
        was_modified: false,
    }
}

fn file(robot: &str, duration: u64, size: u64) -> FileRecord {
    FileRecord {
        file_path: format!("runs/{}.mcap", robot),
        video_path: None,
        duration,
        size,
        robot: robot.to_string(),
        kind: None,
        file_url: None,
        video_url: None,
    }
}

fn table() -> MissionTable {
    let rows = vec![
        MissionRow::from_parts(&mission(1, "Forest"), vec![Tag::new("outdoor", "#00FF00")], &[]),
        MissionRow::from_parts(&mission(2, "Alps"), vec![], &[]),
        MissionRow::from_parts(&mission(3, "Lab"), vec![], &[]),
    ];
    let vocabulary = vec![
        Tag::new("outdoor", "#00FF00"),
        Tag::new("night", "#000080"),
        Tag::new("indoor", "#FF0000"),
    ];
    MissionTable::new(rows, vocabulary)
}

#[test]
fn row_aggregates_files() {
    let files = [file("husky", 60000, 1024), file("Husky", 1200, 2620416), file("spot", 0, 0)];
    let row = MissionRow::from_parts(&mission(7, "Forest"), vec![], &files);
    assert_eq!(row.total_duration, "17:00:00");
    assert_eq!(row.total_size, "2.50 MB");
    assert_eq!(row.robot, "husky and spot");
}

#[test]
fn choosing_the_same_key_twice_flips_direction() {
    let mut t = table();
    t.set_sorting(SortKey::Name);
    assert!(!t.reversed());
    t.set_sorting(SortKey::Name);
    assert!(t.reversed());
    t.set_sorting(SortKey::Location);
    assert!(!t.reversed());
    assert_eq!(t.sort_by(), Some(SortKey::Location));
}

#[test]
fn visible_rows_are_sorted_then_filtered() {
    let mut t = table();
    t.set_sorting(SortKey::Name);
    let names: Vec<String> = t.visible().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Alps", "Forest", "Lab"]);

    t.set_sorting(SortKey::Name);
    t.set_search("o");
    let names: Vec<String> = t.visible().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Forest"]);
}

#[test]
fn upsert_replaces_by_id_and_appends_new_rows() {
    let mut t = table();
    let mut renamed = t.row(2).unwrap().clone();
    renamed.name = "Alps II".to_string();
    t.upsert_row(renamed);
    assert_eq!(t.row(2).unwrap().name, "Alps II");
    assert_eq!(t.rows().len(), 3);

    t.upsert_row(MissionRow::from_parts(&mission(9, "New"), vec![], &[]));
    assert_eq!(t.rows().len(), 4);

    assert_eq!(t.remove_row(9).map(|r| r.id), Some(9));
    assert!(t.remove_row(9).is_none());
}

#[test]
fn available_tags_exclude_attached_ones() {
    let t = table();
    let names: Vec<String> = t.available_tags(1).into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["indoor", "night"]);
}
