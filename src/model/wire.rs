//! Serde helpers for the loosely-typed columns the backend emits.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Float(f64),
    Text(String),
}

/// Accepts `60`, `60.0` or `"60"`; rejects anything that is not a whole,
/// non-negative number.
pub(super) fn u64_lenient<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(de)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        NumberOrString::Float(f) => Err(serde::de::Error::custom(format!(
            "expected a whole non-negative number, got {}",
            f
        ))),
        NumberOrString::Text(s) => s.trim().parse::<u64>().map_err(|_| {
            serde::de::Error::custom(format!("expected an integer string, got {:?}", s))
        }),
    }
}

/// `null` and missing both decode to an empty string.
pub(super) fn nullable_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Empty strings are treated the same as `null`.
pub(super) fn non_empty_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.filter(|s| !s.is_empty()))
}

pub(super) fn optional_url<'de, D>(de: D) -> Result<Option<reqwest::Url>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => reqwest::Url::parse(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid url {:?}: {}", s, e))),
    }
}

pub(super) fn url_as_str<S>(url: &Option<reqwest::Url>, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match url {
        Some(u) => ser.serialize_some(u.as_str()),
        None => ser.serialize_none(),
    }
}

/// `GET /missions/{id}/files/` has been served both as a list of
/// `{ "type": .., "file": { .. } }` links and as a bare list of files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MissionFileEntry {
    Linked {
        #[serde(rename = "type", default, deserialize_with = "non_empty_string")]
        kind: Option<String>,
        file: super::FileRecord,
    },
    Flat(super::FileRecord),
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct MissionFilesPayload(Vec<MissionFileEntry>);

impl MissionFilesPayload {
    pub(crate) fn into_records(self) -> Vec<super::FileRecord> {
        self.0
            .into_iter()
            .map(|entry| match entry {
                MissionFileEntry::Linked { kind, mut file } => {
                    if file.kind.is_none() {
                        file.kind = kind;
                    }
                    file
                }
                MissionFileEntry::Flat(file) => file,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/model/wire_tests.rs"]
mod tests;
