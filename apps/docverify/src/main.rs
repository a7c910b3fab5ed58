//! docverify CLI binary entry point.
//! Resolves settings, runs the verifier and prints the report.

use clap::Parser;
use docverify::cli::Cli;
use docverify::config::{self, OutputMode};
use docverify::{output, utils, Verifier};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("DOCVERIFY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let settings = match config::resolve_settings(
        cli.repo_root.as_deref(),
        cli.docs_dir.as_deref(),
        cli.output.as_deref(),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    let human = settings.output == OutputMode::Human;
    if human && settings.config_file.is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No docverify.toml found; using defaults."
        );
    }

    let mode = settings.output;
    match Verifier::new(settings).with_progress(human).run() {
        Ok(report) => {
            output::print_report(&report, mode);
            std::process::exit(report.exit_code());
        }
        Err(e) => {
            eprintln!("{} verification failed: {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
