//! Mission table view model.
//!
//! Sorting and searching are pure transforms over the loaded rows. Tag edits
//! go through a [`TagBackend`] first and are folded into local state only once
//! every backend step of the edit succeeded.

use crate::model::Tag;

mod row;
pub use self::row::MissionRow;

mod sort;
pub use self::sort::{SortKey, filter_rows, sort_rows};

mod tags;
pub use self::tags::{TagBackend, TagError, TagRemoval};

mod topics;
pub use self::topics::{TopicSortKey, TopicTable, filter_topics, sort_topics};

#[derive(Clone, Debug, Default)]
pub struct MissionTable {
    rows: Vec<MissionRow>,
    vocabulary: Vec<Tag>,
    sort_by: Option<SortKey>,
    reversed: bool,
    search: String,
}

impl MissionTable {
    pub fn new(rows: Vec<MissionRow>, vocabulary: Vec<Tag>) -> Self {
        Self {
            rows,
            vocabulary,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[MissionRow] {
        &self.rows
    }

    pub fn vocabulary(&self) -> &[Tag] {
        &self.vocabulary
    }

    pub fn sort_by(&self) -> Option<SortKey> {
        self.sort_by
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Choosing the current key again flips the direction; a new key starts
    /// ascending.
    pub fn set_sorting(&mut self, key: SortKey) {
        self.reversed = self.sort_by == Some(key) && !self.reversed;
        self.sort_by = Some(key);
    }

    /// Sets key and direction directly.
    pub fn sort(&mut self, key: Option<SortKey>, reversed: bool) {
        self.sort_by = key;
        self.reversed = reversed;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows in display order: sorted by the current key, then filtered by the
    /// current search query.
    pub fn visible(&self) -> Vec<MissionRow> {
        match self.sort_by {
            Some(key) => filter_rows(&sort_rows(&self.rows, key, self.reversed), &self.search),
            None => filter_rows(&self.rows, &self.search),
        }
    }

    pub fn row(&self, id: i64) -> Option<&MissionRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: i64) -> Option<&mut MissionRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Replaces the row with the same id, or appends it.
    pub fn upsert_row(&mut self, row: MissionRow) {
        match self.row_mut(row.id) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn remove_row(&mut self, id: i64) -> Option<MissionRow> {
        let idx = self.rows.iter().position(|r| r.id == id)?;
        Some(self.rows.remove(idx))
    }

    pub fn vocabulary_tag(&self, name: &str) -> Option<&Tag> {
        self.vocabulary.iter().find(|t| t.name == name)
    }

    /// Vocabulary entries not yet attached to `mission_id`, sorted by name.
    pub fn available_tags(&self, mission_id: i64) -> Vec<Tag> {
        let attached: Vec<&str> = self
            .row(mission_id)
            .map(|r| r.tags.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default();
        let mut out: Vec<Tag> = self
            .vocabulary
            .iter()
            .filter(|t| !attached.contains(&t.name.as_str()))
            .cloned()
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

#[cfg(test)]
#[path = "tests/table/table_tests.rs"]
mod tests;
