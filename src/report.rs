//! Report types and formatting.
//!
//! Separate from the commands so deplens can be used as a library without
//! printing side effects. Output follows the same conventions as other
//! lint-style tools: findings to stdout, warnings to stderr, a one-line
//! summary at the end.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::lang::Language;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Dependencies extracted from one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub language: Language,
    /// Canonical dependency names, in file order, duplicates preserved.
    pub dependencies: Vec<String>,
}

/// A file the scan could not process.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Aggregated output of a scan run.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    pub fn dependency_count(&self) -> usize {
        self.reports.iter().map(|r| r.dependencies.len()).sum()
    }
}

/// Print a scan report in the human-readable format.
pub fn print_scan(report: &ScanReport, verbose: bool) {
    print_scan_to(report, verbose, &mut io::stdout().lock());
    print_failures_to(report, verbose, &mut io::stderr().lock());
}

/// Print the per-file listing and summary to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_scan_to<W: Write>(report: &ScanReport, verbose: bool, writer: &mut W) {
    let listed: Vec<_> = report
        .reports
        .iter()
        .filter(|r| verbose || !r.dependencies.is_empty())
        .collect();

    // Align the dependency columns on the widest path.
    let max_path_width = listed
        .iter()
        .map(|r| UnicodeWidthStr::width(r.path.as_str()))
        .max()
        .unwrap_or(0);

    for file in &listed {
        let padding = max_path_width - UnicodeWidthStr::width(file.path.as_str());
        let deps = if file.dependencies.is_empty() {
            "-".dimmed().to_string()
        } else {
            file.dependencies.join(", ")
        };
        let _ = writeln!(
            writer,
            "{}{:>padding$}  {}",
            file.path.bold(),
            "",
            deps,
            padding = padding
        );
    }

    if !listed.is_empty() {
        let _ = writeln!(writer);
    }
    print_summary_to(report, writer);
}

/// Print a scan report as JSON for downstream tooling.
pub fn print_scan_json(report: &ScanReport) -> anyhow::Result<()> {
    print_scan_json_to(report, &mut io::stdout().lock())
}

pub fn print_scan_json_to<W: Write>(report: &ScanReport, writer: &mut W) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

fn print_summary_to<W: Write>(report: &ScanReport, writer: &mut W) {
    let files = report.reports.len();
    let deps = report.dependency_count();

    if report.failures.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} - {} {} found",
                files,
                plural(files, "file", "files"),
                deps,
                plural(deps, "dependency", "dependencies")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Scanned {} {} - {} {} found, {} {} failed",
                files,
                plural(files, "file", "files"),
                deps,
                plural(deps, "dependency", "dependencies"),
                report.failures.len(),
                plural(report.failures.len(), "file", "files")
            )
            .red()
        );
    }
}

fn print_failures_to<W: Write>(report: &ScanReport, verbose: bool, writer: &mut W) {
    if report.failures.is_empty() {
        return;
    }

    if verbose {
        for failure in &report.failures {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                failure.path,
                failure.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be processed (use {} for details)",
            "warning:".bold().yellow(),
            report.failures.len(),
            "-v".cyan()
        );
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
