//! References extracted from documentation text.

use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One comma-separated item of a `lines` clause.
pub enum LineItem {
    Single(u32),
    Range { start: u32, end: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Parsed `lines <spec>` clause, e.g. `1-20, 45, 50-60`.
pub struct LineSpec {
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A `- <path> (lines <spec>)` citation found in a document.
pub struct FileReference {
    pub file_path: String,
    pub lines: LineSpec,
    /// Citing document and 1-based line, e.g. `docs/CONTEXT_INJECTION.md:12`.
    pub context: String,
}

impl FileReference {
    /// Line numbers above `max`, as sorted and merged inclusive ranges.
    /// Works on the items directly so huge ranges are never expanded.
    pub fn lines_beyond(&self, max: usize) -> Vec<RangeInclusive<u32>> {
        let floor = u32::try_from(max).unwrap_or(u32::MAX).saturating_add(1);
        let mut spans: Vec<(u32, u32)> = self
            .lines
            .items
            .iter()
            .map(|it| match *it {
                LineItem::Single(n) => (n, n),
                LineItem::Range { start, end } => (start, end),
            })
            .filter(|&(_, end)| (end as usize) > max)
            .map(|(start, end)| (start.max(floor), end))
            .collect();
        spans.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::new();
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged.into_iter().map(|(a, b)| a..=b).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document citing a link target, with the anchor text it used.
pub struct Citation {
    pub source_document: String,
    pub anchor_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// All citations of one in-repo link target, in discovery order.
pub struct LinkReference {
    pub target: String,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Current documentation version, without the leading `v`.
pub struct VersionRecord {
    pub token: String,
    pub source_document: String,
}

impl VersionRecord {
    /// The changelog marker that must appear for this version, e.g. `[1.2.3]`.
    pub fn changelog_marker(&self) -> String {
        format!("[{}]", self.token)
    }
}
