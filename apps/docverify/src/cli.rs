//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "docverify",
    version,
    about = "Verify documentation references",
    long_about = "docverify — check that a documentation directory still matches the repository.\n\nInjection-point citations must point at existing files and lines, links between documents must resolve, and the current version must appear in the changelog.\n\nConfiguration precedence: CLI > docverify.toml > defaults.",
    after_help = "Examples:\n  docverify\n  docverify --docs-dir bob --output json\n\nExit status: 0 = no issues, 1 = issues found, 2 = run failed"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Documentation root relative to the repository (default: docs)")]
    pub docs_dir: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
