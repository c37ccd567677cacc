use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::args::OfflineCountCommand,
    commands::RunResult,
    config::load_config,
    offline::{count_pending, default_queue_filepath},
};

pub fn offline_count(cmd: OfflineCountCommand) -> Result<RunResult> {
    let root = cmd
        .args
        .common
        .source_root
        .unwrap_or_else(|| PathBuf::from("."));
    let queue_path = resolve_queue_filepath(cmd.args.queue_file, &root)?;
    let count = count_pending(&queue_path)
        .with_context(|| format!("Failed to count offline records in {}", queue_path.display()))?;

    Ok(RunResult::OfflineCount(count))
}

/// Queue location precedence: command-line flag, then the config file
/// found under the source root, then the default under the deplens home
/// directory. A relative `queueFile` resolves against the root it was
/// configured under.
fn resolve_queue_filepath(flag: Option<PathBuf>, root: &Path) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let config_result = load_config(root)?;
    if let Some(path) = config_result.config.queue_file.map(PathBuf::from) {
        return Ok(if path.is_relative() {
            root.join(path)
        } else {
            path
        });
    }

    default_queue_filepath()
}
