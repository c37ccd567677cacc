//! Output for command results.

use anyhow::Result;
use colored::Colorize;

use crate::commands::RunResult;
use crate::report::{SUCCESS_MARK, print_scan, print_scan_json};

pub fn print(result: &RunResult, verbose: bool) -> Result<()> {
    match result {
        RunResult::Scan { report, json } => {
            if *json {
                print_scan_json(report)?;
            } else {
                print_scan(report, verbose);
            }
        }
        // Bare count, one line, so scripts can consume it directly.
        RunResult::OfflineCount(count) => println!("{}", count),
        RunResult::Init { path } => {
            println!("{} Created {}", SUCCESS_MARK.green(), path);
        }
    }

    Ok(())
}
