//! Topic table of one file: the same sort-then-filter pipeline as the
//! mission table, over [`Topic`] rows.

use std::cmp::Ordering;

use crate::model::Topic;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopicSortKey {
    Name,
    Kind,
    MessageCount,
    Frequency,
}

impl TopicSortKey {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "name" => TopicSortKey::Name,
            "type" => TopicSortKey::Kind,
            "message_count" => TopicSortKey::MessageCount,
            "frequency" => TopicSortKey::Frequency,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TopicSortKey::Name => "name",
            TopicSortKey::Kind => "type",
            TopicSortKey::MessageCount => "message_count",
            TopicSortKey::Frequency => "frequency",
        }
    }
}

/// Topics matching `query`, in their incoming order.
///
/// Text columns match on a case-insensitive substring. Numeric columns only
/// match when their printed value equals the query exactly, so `"5"` finds a
/// count of 5 but not one of 50.
pub fn filter_topics(topics: &[Topic], query: &str) -> Vec<Topic> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return topics.to_vec();
    }
    topics
        .iter()
        .filter(|t| matches_topic(t, &q))
        .cloned()
        .collect()
}

fn matches_topic(topic: &Topic, q: &str) -> bool {
    let text = [
        Some(topic.name.as_str()),
        Some(topic.kind.as_str()),
        topic.video_path.as_deref(),
        topic.video_url.as_ref().map(|u| u.as_str()),
    ];
    if text.iter().flatten().any(|v| v.to_lowercase().contains(q)) {
        return true;
    }
    topic.id.is_some_and(|id| id.to_string() == q)
        || topic.message_count.to_string() == q
        || topic.frequency.to_string() == q
}

/// Stable sort by `key`; `reversed` inverts the comparison.
pub fn sort_topics(topics: &[Topic], key: TopicSortKey, reversed: bool) -> Vec<Topic> {
    let mut out = topics.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if reversed { ord.reverse() } else { ord }
    });
    out
}

fn compare(a: &Topic, b: &Topic, key: TopicSortKey) -> Ordering {
    match key {
        TopicSortKey::Name => a.name.cmp(&b.name),
        TopicSortKey::Kind => a.kind.cmp(&b.kind),
        TopicSortKey::MessageCount => a.message_count.cmp(&b.message_count),
        TopicSortKey::Frequency => a.frequency.total_cmp(&b.frequency),
    }
}

/// Sort and search state over the topics of one file.
#[derive(Clone, Debug, Default)]
pub struct TopicTable {
    topics: Vec<Topic>,
    sort_by: Option<TopicSortKey>,
    reversed: bool,
    search: String,
}

impl TopicTable {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self {
            topics,
            ..Self::default()
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn sort_by(&self) -> Option<TopicSortKey> {
        self.sort_by
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Same key again flips the direction; a new key starts ascending.
    pub fn set_sorting(&mut self, key: TopicSortKey) {
        self.reversed = self.sort_by == Some(key) && !self.reversed;
        self.sort_by = Some(key);
    }

    pub fn sort(&mut self, key: Option<TopicSortKey>, reversed: bool) {
        self.sort_by = key;
        self.reversed = reversed;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn visible(&self) -> Vec<Topic> {
        match self.sort_by {
            Some(key) => filter_topics(&sort_topics(&self.topics, key, self.reversed), &self.search),
            None => filter_topics(&self.topics, &self.search),
        }
    }
}

#[cfg(test)]
#[path = "../tests/table/topics_tests.rs"]
mod tests;
