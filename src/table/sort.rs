use std::cmp::Ordering;

use super::MissionRow;

/// Sortable table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Location,
    Date,
    Notes,
    TotalDuration,
    TotalSize,
    Robot,
    Tags,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "name" => SortKey::Name,
            "location" => SortKey::Location,
            "date" => SortKey::Date,
            "notes" => SortKey::Notes,
            "total_duration" => SortKey::TotalDuration,
            "total_size" => SortKey::TotalSize,
            "robot" => SortKey::Robot,
            "tags" => SortKey::Tags,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Location => "location",
            SortKey::Date => "date",
            SortKey::Notes => "notes",
            SortKey::TotalDuration => "total_duration",
            SortKey::TotalSize => "total_size",
            SortKey::Robot => "robot",
            SortKey::Tags => "tags",
        }
    }
}

/// Rows with at least one column containing `query` (case-insensitive,
/// surrounding whitespace ignored), in their original order. Tag columns
/// match on any tag name.
pub fn filter_rows(rows: &[MissionRow], query: &str) -> Vec<MissionRow> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.text_columns().iter().any(|v| v.to_lowercase().contains(&q))
                || row.tags.iter().any(|t| t.name.to_lowercase().contains(&q))
        })
        .cloned()
        .collect()
}

/// Stable sort by `key`. `reversed` inverts the comparison, so rows with
/// equal keys keep their relative order in both directions.
///
/// `total_size` and `total_duration` compare as numbers; values that do not
/// parse come after every number in ascending order.
pub fn sort_rows(rows: &[MissionRow], key: SortKey, reversed: bool) -> Vec<MissionRow> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if reversed { ord.reverse() } else { ord }
    });
    out
}

fn compare(a: &MissionRow, b: &MissionRow, key: SortKey) -> Ordering {
    match key {
        SortKey::TotalSize => compare_numeric(size_bytes(&a.total_size), size_bytes(&b.total_size)),
        SortKey::TotalDuration => compare_numeric(
            duration_secs(&a.total_duration),
            duration_secs(&b.total_duration),
        ),
        SortKey::Tags => first_tag(a).cmp(&first_tag(b)),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Location => a.location.cmp(&b.location),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Notes => a.notes.cmp(&b.notes),
        SortKey::Robot => a.robot.cmp(&b.robot),
    }
}

fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `None` (no tags, or an empty first name) orders before any name.
fn first_tag(row: &MissionRow) -> Option<&str> {
    row.tags
        .first()
        .map(|t| t.name.as_str())
        .filter(|n| !n.is_empty())
}

/// Raw byte counts (`2621440`) or formatted sizes (`2.50 MB`).
fn size_bytes(s: &str) -> Option<f64> {
    let mut parts = s.split_whitespace();
    let value: f64 = parts.next()?.parse().ok()?;
    let scale = match parts.next() {
        None | Some("B") => 1.0,
        Some("KB") => 1024.0,
        Some("MB") => 1024.0 * 1024.0,
        Some("GB") => 1024.0 * 1024.0 * 1024.0,
        Some(_) => return None,
    };
    if parts.next().is_some() || !value.is_finite() {
        return None;
    }
    Some(value * scale)
}

/// Plain seconds (`3600`) or clock notation (`01:00:00`, `20:00`).
fn duration_secs(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for part in s.split(':') {
        let v: f64 = part.parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        total = total * 60.0 + v;
    }
    Some(total)
}

#[cfg(test)]
#[path = "../tests/table/sort_tests.rs"]
mod tests;
