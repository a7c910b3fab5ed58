//! Cross-reference pass: every in-repo link between documents must resolve.

use super::{read_text, Verifier};
use crate::error::{Result, VerifyError};
use crate::models::reference::{Citation, LinkReference};
use crate::models::IssueKind;
use crate::parse::{classify, scan_links, LinkTarget};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Group in-repo links by raw target, keeping first-seen target order and
/// per-target citation order. `docs` pairs a display name with its content.
pub fn collect_links<'a, I>(docs: I) -> Vec<LinkReference>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out: Vec<LinkReference> = Vec::new();
    let mut by_target: HashMap<String, usize> = HashMap::new();
    for (name, content) in docs {
        for link in scan_links(content) {
            if !matches!(classify(link.target), LinkTarget::Local(_)) {
                continue;
            }
            let target = link.target.trim().to_string();
            let citation = Citation {
                source_document: name.to_string(),
                anchor_text: link.text.to_string(),
            };
            match by_target.get(&target) {
                Some(&i) => out[i].citations.push(citation),
                None => {
                    by_target.insert(target.clone(), out.len());
                    out.push(LinkReference {
                        target,
                        citations: vec![citation],
                    });
                }
            }
        }
    }
    out
}

impl Verifier {
    /// Returns the number of distinct in-repo link targets.
    pub(super) fn verify_cross_references(&mut self) -> Result<usize> {
        let docs_root = self.settings.docs_root();
        if !docs_root.is_dir() {
            return Err(VerifyError::DocsRootMissing(docs_root));
        }
        let files = self.document_files(&docs_root)?;
        let mut loaded: Vec<(String, String)> = Vec::with_capacity(files.len());
        for f in &files {
            loaded.push((self.display(f), read_text(f)?));
        }
        let links = collect_links(loaded.iter().map(|(n, c)| (n.as_str(), c.as_str())));
        tracing::debug!(documents = files.len(), targets = links.len(), "collected links");

        for link in &links {
            if self.link_resolves(&docs_root, &link.target) {
                continue;
            }
            for c in &link.citations {
                self.issue(
                    IssueKind::BrokenLink,
                    format!(
                        "Broken link: {} (referenced in {})",
                        link.target, c.source_document
                    ),
                );
            }
        }
        Ok(links.len())
    }

    /// Markdown documents under the docs root matched by the configured
    /// patterns, sorted and deduplicated.
    fn document_files(&self, docs_root: &Path) -> Result<Vec<PathBuf>> {
        // the root is literal; only the configured pattern may carry wildcards
        let base = PathBuf::from(glob::Pattern::escape(&docs_root.to_string_lossy()));
        let mut files: Vec<PathBuf> = Vec::new();
        for pat in &self.settings.link_patterns {
            let pattern = base.join(pat).to_string_lossy().to_string();
            let entries = glob::glob(&pattern).map_err(|source| VerifyError::Pattern {
                pattern: pat.clone(),
                source,
            })?;
            files.extend(entries.flatten().filter(|p| p.is_file()));
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn link_resolves(&self, docs_root: &Path, target: &str) -> bool {
        let LinkTarget::Local(path) = classify(target) else {
            return true;
        };
        let resolved = if path.starts_with('/') {
            self.settings.in_repo(path)
        } else {
            docs_root.join(path)
        };
        let ok = resolved.exists();
        tracing::trace!(link = target, resolved = %resolved.display(), ok, "resolve link");
        ok
    }
}
