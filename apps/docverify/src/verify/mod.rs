//! Documentation verifier.
//!
//! Three passes run in a fixed order and share only the accumulated issue
//! and warning lists:
//! - injection points: citations `- <path> (lines <spec>)` are checked for
//!   file existence and line bounds,
//! - cross-references: inline links between documents must resolve,
//! - version consistency: the current version must appear in the changelog.
//!
//! Findings never abort a run. Only structural failures (a document that
//! exists but cannot be read, a missing documentation root) surface as
//! `VerifyError`.

mod injection;
mod links;
mod version;

use crate::config::Settings;
use crate::error::{Result, VerifyError};
use crate::models::{Issue, IssueKind, Phase, PhaseStat, Report, Warning, WarningKind};
use crate::utils;
use std::fs;
use std::path::Path;

pub use injection::{extract_references, MalformedCitation};
pub use links::collect_links;
pub use version::extract_version;

/// Owns the state of one verification run.
pub struct Verifier {
    settings: Settings,
    issues: Vec<Issue>,
    warnings: Vec<Warning>,
    phases: Vec<PhaseStat>,
    progress: bool,
}

impl Verifier {
    pub fn new(settings: Settings) -> Self {
        Verifier {
            settings,
            issues: Vec::new(),
            warnings: Vec::new(),
            phases: Vec::new(),
            progress: false,
        }
    }

    /// Print phase banners and counts to stderr while running.
    pub fn with_progress(mut self, on: bool) -> Self {
        self.progress = on;
        self
    }

    /// Run all passes and produce the final report.
    pub fn run(mut self) -> Result<Report> {
        tracing::debug!(root = %self.settings.repo_root.display(), "starting verification");
        self.phase(Phase::InjectionPoints, Self::verify_injection_points)?;
        self.phase(Phase::CrossReferences, Self::verify_cross_references)?;
        self.phase(Phase::VersionConsistency, Self::verify_version_consistency)?;
        Ok(Report::new(self.issues, self.warnings, self.phases))
    }

    fn phase(&mut self, phase: Phase, pass: fn(&mut Self) -> Result<usize>) -> Result<()> {
        self.note(&format!("Verifying {}...", phase.label()));
        let (issues_before, warnings_before) = (self.issues.len(), self.warnings.len());
        let found = pass(self)?;
        let stat = PhaseStat {
            phase,
            found,
            issues: self.issues.len() - issues_before,
            warnings: self.warnings.len() - warnings_before,
        };
        self.note(&format!(
            "{}: {} found, {} issue(s), {} warning(s)",
            phase.label(),
            stat.found,
            stat.issues,
            stat.warnings
        ));
        self.phases.push(stat);
        Ok(())
    }

    fn note(&self, msg: &str) {
        if self.progress {
            eprintln!("{} {}", utils::info_prefix(), msg);
        }
    }

    fn issue(&mut self, kind: IssueKind, message: String) {
        tracing::debug!(?kind, %message, "issue");
        self.issues.push(Issue { kind, message });
    }

    fn warning(&mut self, kind: WarningKind, message: String) {
        tracing::debug!(?kind, %message, "warning");
        self.warnings.push(Warning { kind, message });
    }

    /// Repository-relative display form of a path.
    fn display(&self, path: &Path) -> String {
        utils::rel_to_root(path, &self.settings.repo_root)
    }

    /// Read a required document. A missing document is recorded as an issue
    /// and yields `None`; an unreadable one aborts the run.
    fn read_required(&mut self, rel: &str, role: &str) -> Result<Option<String>> {
        let path = self.settings.in_repo(rel);
        if !path.is_file() {
            self.issue(
                IssueKind::MissingFile,
                format!("Missing file: {} ({})", rel, role),
            );
            return Ok(None);
        }
        read_text(&path).map(Some)
    }
}

/// Read a file as text; invalid UTF-8 is replaced rather than rejected.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| VerifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, content).unwrap();
    }

    fn clean_tree(root: &Path) {
        write(root, "docs/CONTEXT_INJECTION.md", "# Injection points\n\nNone yet.\n");
        write(root, "docs/VERSION.md", "# Version\n\n## Current Version\n**v1.2.3**\n");
        write(root, "docs/CHANGELOG.md", "# Changelog\n\n## [1.2.3] - 2024-01-01\n");
    }

    fn run(root: &Path) -> Report {
        Verifier::new(Settings::with_root(root)).run().unwrap()
    }

    #[test]
    fn test_clean_tree_passes() {
        let dir = tempdir().unwrap();
        clean_tree(dir.path());
        let report = run(dir.path());
        assert!(report.issues.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.exit_code(), 0);
        let phases: Vec<Phase> = report.phases.iter().map(|p| p.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::InjectionPoints,
                Phase::CrossReferences,
                Phase::VersionConsistency
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_lines_yield_one_issue() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        clean_tree(root);
        write(root, "docs/a.md", "one\ntwo\nthree\n");
        write(
            root,
            "docs/CONTEXT_INJECTION.md",
            "# Injection points\n\n- docs/a.md (lines 1-5)\n",
        );
        let report = run(root);
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::InvalidLineNumber);
        assert!(issue.message.contains("4, 5"), "{}", issue.message);
        assert!(issue.message.contains("max: 3"), "{}", issue.message);
        assert!(issue.message.contains("docs/CONTEXT_INJECTION.md:3"));
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.phases[0].found, 1);
        assert_eq!(report.phases[0].issues, 1);
    }

    #[test]
    fn test_warnings_do_not_fail_the_run() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        clean_tree(root);
        write(root, "docs/CHANGELOG.md", "# Changelog\n\n## [1.2.2]\n");
        let report = run(root);
        assert!(report.issues.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.exit_code(), 0);
        assert!(report.summary.ok);
    }

    #[test]
    fn test_findings_keep_discovery_order_across_phases() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        clean_tree(root);
        write(
            root,
            "docs/CONTEXT_INJECTION.md",
            "- src/gone.ts (lines 1)\nSee [guide](GUIDE.md).\n",
        );
        fs::remove_file(root.join("docs/CHANGELOG.md")).unwrap();
        let report = run(root);
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingFile,
                IssueKind::BrokenLink,
                IssueKind::MissingFile
            ]
        );
        assert!(report.issues[2].message.contains("docs/CHANGELOG.md"));
    }

    #[test]
    fn test_missing_docs_root_is_fatal() {
        let dir = tempdir().unwrap();
        let err = Verifier::new(Settings::with_root(dir.path()))
            .run()
            .unwrap_err();
        assert!(matches!(err, VerifyError::DocsRootMissing(_)));
    }
}
