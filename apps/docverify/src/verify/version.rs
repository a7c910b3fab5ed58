//! Version consistency: the current documentation version must be listed
//! in the changelog. Both findings here are warnings.

use super::Verifier;
use crate::error::Result;
use crate::models::reference::VersionRecord;
use crate::models::WarningKind;
use regex::Regex;
use std::sync::OnceLock;

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"## Current Version\s*\*\*v([^*\s)]+)\*\*").expect("valid version pattern")
    })
}

/// Find the `## Current Version` / `**v<token>**` pair in a version document.
pub fn extract_version(doc: &str, content: &str) -> Option<VersionRecord> {
    let caps = heading_re().captures(content)?;
    Some(VersionRecord {
        token: caps[1].to_string(),
        source_document: doc.to_string(),
    })
}

impl Verifier {
    /// Returns 1 when a version was extracted, 0 otherwise.
    pub(super) fn verify_version_consistency(&mut self) -> Result<usize> {
        let version_doc = self.settings.version_doc.clone();
        let Some(content) = self.read_required(&version_doc, "version document")? else {
            return Ok(0);
        };
        let Some(version) = extract_version(&version_doc, &content) else {
            self.warning(
                WarningKind::VersionHeadingMissing,
                format!("Could not extract current version from {}", version_doc),
            );
            return Ok(0);
        };
        self.note(&format!("Current documentation version: v{}", version.token));

        let changelog_doc = self.settings.changelog_doc.clone();
        if let Some(changelog) = self.read_required(&changelog_doc, "changelog")? {
            if !changelog.contains(&version.changelog_marker()) {
                self.warning(
                    WarningKind::VersionNotInChangelog,
                    format!("Version v{} not found in {}", version.token, changelog_doc),
                );
            }
        }
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_extract_version_variants() {
        let v = extract_version("docs/VERSION.md", "# V\n\n## Current Version\n\n**v2.0.1** (2024-05-01)\n").unwrap();
        assert_eq!(v.token, "2.0.1");
        assert_eq!(v.changelog_marker(), "[2.0.1]");
        let v = extract_version("v", "## Current Version **v1.0.0-beta.2**").unwrap();
        assert_eq!(v.token, "1.0.0-beta.2");
        assert!(extract_version("v", "## Version\n**v1.0.0**").is_none());
        assert!(extract_version("v", "## Current Version\nsee below\n**v1.0.0**").is_none());
    }

    fn verifier(version: Option<&str>, changelog: Option<&str>) -> (tempfile::TempDir, Verifier) {
        let dir = tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        if let Some(v) = version {
            fs::write(docs.join("VERSION.md"), v).unwrap();
        }
        if let Some(c) = changelog {
            fs::write(docs.join("CHANGELOG.md"), c).unwrap();
        }
        let v = Verifier::new(Settings::with_root(dir.path()));
        (dir, v)
    }

    #[test]
    fn test_matching_changelog_has_no_warnings() {
        let (_d, mut v) = verifier(
            Some("## Current Version\n**v1.2.3**\n"),
            Some("## [1.2.3] - 2024-01-01\n"),
        );
        assert_eq!(v.verify_version_consistency().unwrap(), 1);
        assert!(v.warnings.is_empty());
        assert!(v.issues.is_empty());
    }

    #[test]
    fn test_missing_heading_warns_once_and_stops() {
        // changelog absent: would be an issue if the check went on
        let (_d, mut v) = verifier(Some("# Version 1.2.3\n"), None);
        assert_eq!(v.verify_version_consistency().unwrap(), 0);
        assert_eq!(v.warnings.len(), 1);
        assert_eq!(v.warnings[0].kind, WarningKind::VersionHeadingMissing);
        assert!(v.issues.is_empty());
    }

    #[test]
    fn test_version_missing_from_changelog_is_warning() {
        let (_d, mut v) = verifier(
            Some("## Current Version\n**v1.2.4**\n"),
            Some("## [1.2.3]\n"),
        );
        v.verify_version_consistency().unwrap();
        assert_eq!(v.warnings.len(), 1);
        assert_eq!(v.warnings[0].kind, WarningKind::VersionNotInChangelog);
        assert_eq!(v.warnings[0].message, "Version v1.2.4 not found in docs/CHANGELOG.md");
        assert!(v.issues.is_empty());
    }

    #[test]
    fn test_missing_version_document_is_issue() {
        let (_d, mut v) = verifier(None, Some("## [1.2.3]\n"));
        assert_eq!(v.verify_version_consistency().unwrap(), 0);
        assert_eq!(v.issues.len(), 1);
        assert!(v.warnings.is_empty());
    }
}
