//! Run-level failures.
//!
//! Findings about the documentation itself are never errors; they are
//! collected as issues or warnings. `VerifyError` covers the cases where a
//! run cannot continue at all and maps to exit status 2.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal verifier error.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("documentation root not found: {}", .0.display())]
    DocsRootMissing(PathBuf),

    #[error("invalid link pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, VerifyError>;
