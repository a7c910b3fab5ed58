//! Report rendering.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized `Report`: issues, warnings, per-phase counts and a summary.

use crate::config::OutputMode;
use crate::models::Report;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

/// Print the report in the requested format.
pub fn print_report(report: &Report, output: OutputMode) {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        OutputMode::Human => print!("{}", render_human(report, use_colors())),
    }
}

/// Human-readable report text.
pub fn render_human(report: &Report, color: bool) -> String {
    let mut out = String::new();
    let heading = "Verification Summary";
    if color {
        out.push_str(&format!("{}\n", heading.bold()));
    } else {
        out.push_str(&format!("{}\n", heading));
    }
    out.push_str(&format!("Issues found: {}\n", report.summary.issues));
    out.push_str(&format!("Warnings: {}\n", report.summary.warnings));

    if !report.issues.is_empty() {
        out.push_str("\nCritical issues:\n");
        for is in &report.issues {
            let (icon, sev) = if color {
                ("✖".red().to_string(), "⟦error⟧".red().bold().to_string())
            } else {
                ("✖".to_string(), "⟦error⟧".to_string())
            };
            out.push_str(&format!("  {} {} {}\n", icon, sev, is.message));
        }
    }
    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for w in &report.warnings {
            let (icon, sev) = if color {
                ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string())
            } else {
                ("▲".to_string(), "⟦warn⟧".to_string())
            };
            out.push_str(&format!("  {} {} {}\n", icon, sev, w.message));
        }
    }
    if report.issues.is_empty() && report.warnings.is_empty() {
        let ok = "✔ All documentation checks passed!";
        if color {
            out.push_str(&format!("\n{}\n", ok.green().bold()));
        } else {
            out.push_str(&format!("\n{}\n", ok));
        }
    }
    out
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}
