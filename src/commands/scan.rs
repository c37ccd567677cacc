use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::{CommonArgs, ScanCommand},
    commands::RunResult,
    config::{CONFIG_FILE_NAME, load_config},
    engine::{ExtractError, ImportExtractor},
    file_scanner::{ScanOptions, scan_files},
    lang::Language,
    report::{FileFailure, FileReport, ScanReport},
};

pub fn scan(cmd: ScanCommand) -> Result<RunResult> {
    let files = discover_files(&cmd.args.common)?;
    let report = run_extraction(&files);

    Ok(RunResult::Scan {
        report,
        json: cmd.args.json,
    })
}

/// Load configuration and walk the source tree for scannable files.
fn discover_files(args: &CommonArgs) -> Result<Vec<PathBuf>> {
    let root_dir = args
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    if !root_dir.is_dir() {
        bail!("Source root is not a directory: {}", root_dir.display());
    }

    let config_result = load_config(&root_dir)?;
    if args.verbose && !config_result.from_file {
        eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let config = config_result.config;

    // The config's sourceRoot is relative to wherever the scan was
    // rooted; a plain "./" keeps paths unprefixed.
    let base_dir = match config.source_root.as_str() {
        "." | "./" => root_dir,
        other => root_dir.join(other),
    };

    let scan_result = scan_files(
        &base_dir,
        &ScanOptions {
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            verbose: args.verbose,
        },
    );

    if scan_result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan_result.skipped_count,
            if args.verbose {
                ""
            } else {
                " (use -v for details)"
            }
        );
    }

    Ok(scan_result.files)
}

/// Run the extractor over every file in parallel. Each worker owns a fresh
/// extractor instance, so no run shares state with another.
fn run_extraction(files: &[PathBuf]) -> ScanReport {
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    let results: Vec<_> = files.par_iter().map(|path| extract_file(path)).collect();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(failure) => failures.push(failure),
        }
    }

    ScanReport { reports, failures }
}

fn extract_file(path: &Path) -> Result<FileReport, FileFailure> {
    let display_path = path.to_string_lossy().into_owned();

    let Some(language) = Language::from_path(path) else {
        return Err(FileFailure {
            path: display_path,
            error: "unsupported file extension".to_string(),
        });
    };

    let dependencies = open_and_extract(path, language).map_err(|e| FileFailure {
        path: display_path.clone(),
        error: e.to_string(),
    })?;

    Ok(FileReport {
        path: display_path,
        language,
        dependencies,
    })
}

fn open_and_extract(path: &Path, language: Language) -> Result<Vec<String>, ExtractError> {
    let file = File::open(path)?;
    let mut extractor = ImportExtractor::new(language.profile());
    let tokenizer = language.tokenizer();
    extractor.parse(file, tokenizer.as_ref())
}
