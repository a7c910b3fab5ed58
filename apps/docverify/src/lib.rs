//! docverify core library.
//!
//! This crate exposes programmatic APIs for verifying that a documentation
//! directory still agrees with the repository it describes.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective settings resolution.
//! - `parse`: Citation and link parsers.
//! - `verify`: The three verification passes and their orchestrator.
//! - `models`: References, findings and the report.
//! - `output`: Human/JSON printers.
//! - `error`: Run-level failures.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod utils;
pub mod verify;

pub use error::VerifyError;
pub use verify::Verifier;
