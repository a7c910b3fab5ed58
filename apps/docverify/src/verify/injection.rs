//! Injection-point pass: extract citations and check existence and bounds.

use super::{read_text, Verifier};
use crate::error::Result;
use crate::models::reference::FileReference;
use crate::models::IssueKind;
use crate::parse::{parse_citation, CitationError};
use crate::utils;

/// A citation whose `lines` clause could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCitation {
    pub file_path: String,
    pub context: String,
    pub error: CitationError,
}

/// Extract every citation from `content`. `doc` labels the context of each
/// reference (`<doc>:<line>`).
pub fn extract_references(
    doc: &str,
    content: &str,
) -> (Vec<FileReference>, Vec<MalformedCitation>) {
    let mut refs = Vec::new();
    let mut bad = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let Some(c) = parse_citation(line) else {
            continue;
        };
        let context = format!("{}:{}", doc, idx + 1);
        match c.spec {
            Ok(lines) => refs.push(FileReference {
                file_path: c.path,
                lines,
                context,
            }),
            Err(error) => bad.push(MalformedCitation {
                file_path: c.path,
                context,
                error,
            }),
        }
    }
    (refs, bad)
}

impl Verifier {
    /// Returns the number of citations found across all injection documents.
    pub(super) fn verify_injection_points(&mut self) -> Result<usize> {
        let docs = self.settings.injection_docs.clone();
        let mut found = 0;
        for doc in &docs {
            let Some(content) = self.read_required(doc, "injection document")? else {
                continue;
            };
            let (refs, bad) = extract_references(doc, &content);
            tracing::debug!(doc = %doc, references = refs.len(), malformed = bad.len(), "extracted citations");
            found += refs.len() + bad.len();
            for m in bad {
                self.issue(
                    IssueKind::MalformedCitation,
                    format!(
                        "Malformed citation for {}: {} ({})",
                        m.file_path, m.error, m.context
                    ),
                );
            }
            for r in &refs {
                self.check_reference(r)?;
            }
        }
        Ok(found)
    }

    /// Existence first; bounds only when the file is there.
    fn check_reference(&mut self, r: &FileReference) -> Result<()> {
        let path = self.settings.in_repo(&r.file_path);
        if !path.is_file() {
            self.issue(
                IssueKind::MissingFile,
                format!(
                    "Missing file: {} (injection point, {})",
                    r.file_path, r.context
                ),
            );
            return Ok(());
        }
        let content = match read_text(&path) {
            Ok(content) => content,
            Err(e) => {
                self.issue(
                    IssueKind::UnreadableFile,
                    format!("Unreadable file: {}: {} ({})", r.file_path, e, r.context),
                );
                return Ok(());
            }
        };
        let max = utils::count_lines(&content);
        let beyond = r.lines_beyond(max);
        if beyond.is_empty() {
            return Ok(());
        }
        let noun = if utils::range_len(&beyond) == 1 {
            "number"
        } else {
            "numbers"
        };
        self.issue(
            IssueKind::InvalidLineNumber,
            format!(
                "Invalid line {} {} in {} (max: {}) ({})",
                noun,
                utils::compact_ranges(&beyond),
                r.file_path,
                max,
                r.context
            ),
        );
        Ok(())
    }
}
