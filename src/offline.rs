//! Offline heartbeat queue inspection.
//!
//! When results cannot be delivered, heartbeat records queue up in a
//! JSON-lines file. This module resolves the queue location and counts
//! the pending records without consuming them.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const QUEUE_FILE_NAME: &str = "offline_queue.jsonl";

/// One queued record. Deserialized strictly enough to catch queue
/// corruption while tolerating extra fields from newer writers.
#[derive(Debug, Deserialize)]
pub struct QueuedRecord {
    pub entity: String,
    pub time: f64,
}

/// Default queue location: `$DEPLENS_HOME/offline_queue.jsonl`, falling
/// back to `$HOME/.deplens/offline_queue.jsonl`.
pub fn default_queue_filepath() -> Result<PathBuf> {
    if let Some(home) = env::var_os("DEPLENS_HOME") {
        return Ok(PathBuf::from(home).join(QUEUE_FILE_NAME));
    }

    let home = env::var_os("HOME")
        .context("Neither DEPLENS_HOME nor HOME is set; cannot locate offline queue")?;
    Ok(PathBuf::from(home).join(".deplens").join(QUEUE_FILE_NAME))
}

/// Count the records pending in the queue file.
///
/// A missing queue file means nothing has been queued yet and counts as
/// zero. A line that fails to parse is a corrupt queue and is an error,
/// not a partial count.
pub fn count_pending(path: &Path) -> Result<usize> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read queue file: {}", path.display()));
        }
    };

    let mut count = 0;
    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = serde_json::from_str::<QueuedRecord>(line) {
            bail!(
                "Corrupt queue record at {}:{}: {}",
                path.display(),
                line_number + 1,
                e
            );
        }
        count += 1;
    }

    Ok(count)
}
