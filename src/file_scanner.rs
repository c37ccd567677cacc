//! Source file discovery.
//!
//! Walks the configured include directories and collects every file whose
//! extension maps to a supported [`Language`], honoring ignore patterns
//! and the test-file filter.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{TEST_FILE_PATTERNS, is_glob_pattern};
use crate::lang::Language;

/// Result of scanning for source files.
pub struct ScanResult {
    /// Discovered files, sorted by path for deterministic processing.
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed during the walk.
    pub skipped_count: usize,
}

pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

pub fn scan_files(base_dir: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let (literal_ignores, glob_ignores) = split_ignores(base_dir, options);

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for dir in include_dirs(base_dir, options) {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if options.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if literal_ignores.iter().any(|p| path.starts_with(p)) {
                continue;
            }
            let path_str = path.to_string_lossy();
            if glob_ignores.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && Language::from_path(path).is_some() {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Split ignore patterns into literal path prefixes and compiled globs,
/// appending the test-file patterns when enabled.
fn split_ignores(base_dir: &Path, options: &ScanOptions<'_>) -> (Vec<PathBuf>, Vec<Pattern>) {
    let mut literals = Vec::new();
    let mut globs = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) => {
                    if options.verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literals.push(base_dir.join(p));
        }
    }

    if options.ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                globs.push(pattern);
            }
        }
    }

    (literals, globs)
}

/// Resolve the include list to concrete directories. Patterns with glob
/// wildcards expand to every matching directory; everything else is a
/// literal path under `base_dir`.
fn include_dirs(base_dir: &Path, options: &ScanOptions<'_>) -> Vec<PathBuf> {
    if options.includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut dirs = Vec::new();
    for inc in options.includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => {
                    dirs.extend(entries.flatten().filter(|e| e.is_dir()));
                }
                Err(e) => {
                    if options.verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else {
            let path = base_dir.join(inc);
            if path.exists() {
                dirs.push(path);
            } else if options.verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    dirs
}
