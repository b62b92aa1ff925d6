//! Display helpers for durations, sizes, robot names and file paths.

use std::collections::HashSet;

const KIB: f64 = 1024.0;

/// Leading decimal digits of `s`, like `parseInt(s, 10)` restricted to
/// non-negative values. Returns `None` when `s` does not start with a digit.
pub fn parse_leading_u64(s: &str) -> Option<u64> {
    let t = s.trim();
    let end = t
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(t.len());
    if end == 0 {
        return None;
    }
    t[..end].parse::<u64>().ok()
}

/// `hh:mm:ss`; with `short` and less than an hour, `mm:ss`.
pub fn format_duration(total_secs: u64, short: bool) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if short && hours == 0 {
        return format!("{:02}:{:02}", minutes, seconds);
    }
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Bytes as `x.xx KB`, `x.xx MB` or `x.xx GB` (binary multiples).
pub fn format_size(bytes: u64) -> String {
    let kilobytes = bytes as f64 / KIB;
    let megabytes = kilobytes / KIB;
    let gigabytes = megabytes / KIB;
    let (value, unit) = if megabytes < 1.0 {
        (kilobytes, "KB")
    } else if gigabytes < 1.0 {
        (megabytes, "MB")
    } else {
        (gigabytes, "GB")
    };
    format!("{:.2} {}", value, unit)
}

/// Formats backend duration strings (seconds). Unparseable entries count as 0.
pub fn format_durations<S: AsRef<str>>(durations: &[S]) -> Vec<String> {
    durations
        .iter()
        .map(|d| format_duration(parse_leading_u64(d.as_ref()).unwrap_or(0), false))
        .collect()
}

/// Formats backend size strings (bytes). Unparseable entries count as 0.
pub fn format_sizes<S: AsRef<str>>(sizes: &[S]) -> Vec<String> {
    sizes
        .iter()
        .map(|s| format_size(parse_leading_u64(s.as_ref()).unwrap_or(0)))
        .collect()
}

pub fn format_total_duration<S: AsRef<str>>(durations: &[S]) -> String {
    let total = durations
        .iter()
        .filter_map(|d| parse_leading_u64(d.as_ref()))
        .fold(0u64, u64::saturating_add);
    format_duration(total, false)
}

pub fn format_total_size<S: AsRef<str>>(sizes: &[S]) -> String {
    let total = sizes
        .iter()
        .filter_map(|s| parse_leading_u64(s.as_ref()))
        .fold(0u64, u64::saturating_add);
    format_size(total)
}

/// Joins robot names as `a`, `a and b`, `a, b and c` (or `a, b, c` when
/// `and_separated` is false). Duplicates are dropped case-insensitively,
/// keeping the first spelling; empty names are skipped.
pub fn format_robot_names<S: AsRef<str>>(names: &[S], and_separated: bool) -> String {
    let mut seen = HashSet::new();
    let mut unique: Vec<&str> = Vec::new();
    for name in names {
        let name = name.as_ref();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            unique.push(name);
        }
    }

    match unique.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] if and_separated => format!("{} and {}", head.join(", "), last),
        all => all.join(", "),
    }
}

/// A list of file paths split into their shared directory prefix and the
/// remaining per-file names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommonPath {
    pub common: String,
    pub files: Vec<String>,
}

/// Strips the longest shared directory prefix from `paths`. Paths written
/// with backslashes (judged by the first path) are returned with backslashes.
pub fn split_common_path<S: AsRef<str>>(paths: &[S]) -> CommonPath {
    let Some(first) = paths.first() else {
        return CommonPath::default();
    };
    let backslashes = first.as_ref().contains('\\');
    let restore = |s: String| {
        if backslashes { s.replace('/', "\\") } else { s }
    };

    let normalized: Vec<String> = paths.iter().map(|p| p.as_ref().replace('\\', "/")).collect();

    if let [single] = normalized.as_slice() {
        let (dir, file) = match single.rfind('/') {
            Some(i) => (&single[..=i], &single[i + 1..]),
            None => ("", single.as_str()),
        };
        return CommonPath {
            common: restore(dir.to_string()),
            files: vec![restore(file.to_string())],
        };
    }

    let split: Vec<Vec<&str>> = normalized.iter().map(|p| p.split('/').collect()).collect();
    let min_len = split.iter().map(Vec::len).min().unwrap_or(0);
    let mut shared = 0;
    while shared < min_len && split.iter().all(|segs| segs[shared] == split[0][shared]) {
        shared += 1;
    }

    let mut common = split[0][..shared].join("/");
    if !common.is_empty() && !common.ends_with('/') {
        common.push('/');
    }

    let files = normalized
        .iter()
        .map(|full| {
            if !common.is_empty() && full.starts_with(&common) {
                full[common.len()..].to_string()
            } else {
                full.rsplit('/').next().unwrap_or_default().to_string()
            }
        })
        .map(restore)
        .collect();

    CommonPath {
        common: restore(common),
        files,
    }
}

/// Strict `#RRGGBB`.
pub fn is_hex_color(input: &str) -> bool {
    input.len() == 7
        && input.starts_with('#')
        && input[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
