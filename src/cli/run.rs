//! Command dispatch for the deplens CLI.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use crate::commands::{RunResult, offline_count::offline_count, scan::scan};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<RunResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::OfflineCount(cmd)) => offline_count(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<RunResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(RunResult::Init {
        path: CONFIG_FILE_NAME.to_string(),
    })
}
