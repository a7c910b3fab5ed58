//! Shared data models for verifier findings and the final report.

pub mod reference;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Category of a finding that fails the run.
pub enum IssueKind {
    MissingFile,
    InvalidLineNumber,
    BrokenLink,
    MalformedCitation,
    UnreadableFile,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Category of an informational finding.
pub enum WarningKind {
    VersionHeadingMissing,
    VersionNotInChangelog,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A finding that forces a non-zero exit status.
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A finding that is reported but never affects the exit status.
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    InjectionPoints,
    CrossReferences,
    VersionConsistency,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::InjectionPoints => "injection points",
            Phase::CrossReferences => "cross-references",
            Phase::VersionConsistency => "version consistency",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Per-phase counters: how many items were found and how many issues and
/// warnings the phase contributed.
pub struct PhaseStat {
    pub phase: Phase,
    pub found: usize,
    pub issues: usize,
    pub warnings: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub issues: usize,
    pub warnings: usize,
    pub ok: bool,
}

#[derive(Serialize, Debug, Clone)]
/// Verification results container.
pub struct Report {
    pub issues: Vec<Issue>,
    pub warnings: Vec<Warning>,
    pub phases: Vec<PhaseStat>,
    pub summary: Summary,
}

impl Report {
    pub fn new(issues: Vec<Issue>, warnings: Vec<Warning>, phases: Vec<PhaseStat>) -> Self {
        let summary = Summary {
            issues: issues.len(),
            warnings: warnings.len(),
            ok: issues.is_empty(),
        };
        Report {
            issues,
            warnings,
            phases,
            summary,
        }
    }

    /// Exit status for a completed run: warnings never fail it.
    pub fn exit_code(&self) -> i32 {
        if self.summary.ok {
            0
        } else {
            1
        }
    }
}
