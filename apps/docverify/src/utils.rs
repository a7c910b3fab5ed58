//! Small helpers shared by the verifier and printers.

use owo_colors::OwoColorize;
use std::ops::RangeInclusive;
use std::path::Path;

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Display `path` relative to `root` with forward slashes, falling back to
/// the path as given when no relative form exists.
pub fn rel_to_root(path: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    rel.to_string_lossy().replace('\\', "/")
}

/// Render sorted, disjoint line ranges compactly: spans of three or more
/// lines print as `a-b`, shorter ones list each number, e.g. `4, 5, 9-11`.
pub fn compact_ranges(ranges: &[RangeInclusive<u32>]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for r in ranges {
        let (a, b) = (*r.start(), *r.end());
        if b - a >= 2 {
            parts.push(format!("{}-{}", a, b));
        } else {
            parts.extend((a..=b).map(|n| n.to_string()));
        }
    }
    parts.join(", ")
}

/// Total count of line numbers covered by `ranges`.
pub fn range_len(ranges: &[RangeInclusive<u32>]) -> u64 {
    ranges
        .iter()
        .map(|r| u64::from(*r.end() - *r.start()) + 1)
        .sum()
}

/// Count lines the way an editor numbers them: a trailing newline does not
/// open another line, and an empty file has none.
pub fn count_lines(content: &str) -> usize {
    content.lines().count()
}
