//! Configuration discovery and effective settings resolution.
//!
//! docverify reads `docverify.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce `Settings`.
//! Defaults:
//! - `docs_dir`: `docs`
//! - `injection_docs`: `["docs/CONTEXT_INJECTION.md"]`
//! - `version_doc`: `docs/VERSION.md`
//! - `changelog_doc`: `docs/CHANGELOG.md`
//! - `link_patterns`: `["*.md"]` (relative to `docs_dir`)
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, VerifyError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["docverify.toml", "docverify.yaml", "docverify.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `docverify.toml|yaml`.
pub struct VerifyConfig {
    pub docs_dir: Option<String>,
    pub injection_docs: Option<Vec<String>>,
    pub version_doc: Option<String>,
    pub changelog_doc: Option<String>,
    pub link_patterns: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "human" => Some(OutputMode::Human),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved settings handed to the verifier. Every document path is
/// relative to `repo_root`; nothing depends on the process working directory.
pub struct Settings {
    pub repo_root: PathBuf,
    pub docs_dir: PathBuf,
    pub injection_docs: Vec<String>,
    pub version_doc: String,
    pub changelog_doc: String,
    pub link_patterns: Vec<String>,
    pub output: OutputMode,
    /// Config file the settings were read from, when one was found.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Defaults anchored at `repo_root`.
    pub fn with_root(repo_root: impl Into<PathBuf>) -> Self {
        Settings {
            repo_root: repo_root.into(),
            docs_dir: PathBuf::from("docs"),
            injection_docs: vec!["docs/CONTEXT_INJECTION.md".to_string()],
            version_doc: "docs/VERSION.md".to_string(),
            changelog_doc: "docs/CHANGELOG.md".to_string(),
            link_patterns: vec!["*.md".to_string()],
            output: OutputMode::Human,
            config_file: None,
        }
    }

    /// Absolute-ish path of the documentation root.
    pub fn docs_root(&self) -> PathBuf {
        self.repo_root.join(&self.docs_dir)
    }

    /// Resolve a repository-relative path. A leading `/` still means the
    /// repository root, not the filesystem root.
    pub fn in_repo(&self, rel: &str) -> PathBuf {
        self.repo_root.join(rel.trim_start_matches('/'))
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `docverify.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start.to_path_buf(),
        }
    }
}

/// Load `VerifyConfig` from the first config file present under `root`.
///
/// Returns `Ok(None)` when there is no config file; a file that exists but
/// does not parse is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, VerifyConfig)>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| VerifyError::Read {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<VerifyConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<VerifyConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(VerifyError::Config { path, message }),
        };
    }
    Ok(None)
}

/// Resolve `Settings` by merging CLI flags, discovered config, and defaults.
pub fn resolve_settings(
    cli_repo_root: Option<&str>,
    cli_docs_dir: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Settings> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let (config_file, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, VerifyConfig::default()),
    };

    let mut settings = Settings::with_root(repo_root);
    settings.config_file = config_file.clone();
    if let Some(d) = cli_docs_dir.map(str::to_string).or(cfg.docs_dir) {
        settings.docs_dir = PathBuf::from(d);
    }
    if let Some(docs) = cfg.injection_docs {
        settings.injection_docs = docs;
    }
    if let Some(v) = cfg.version_doc {
        settings.version_doc = v;
    }
    if let Some(c) = cfg.changelog_doc {
        settings.changelog_doc = c;
    }
    if let Some(p) = cfg.link_patterns {
        settings.link_patterns = p;
    }

    let output = cli_output.map(str::to_string).or(cfg.output);
    if let Some(o) = output {
        settings.output = OutputMode::parse(&o).ok_or_else(|| VerifyError::Config {
            path: config_file.unwrap_or_else(|| PathBuf::from("--output")),
            message: format!("unknown output mode '{}' (expected human|json)", o),
        })?;
    }
    Ok(settings)
}
