use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".deplensrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories or glob patterns to scan. Empty means the whole
    /// source root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Offline heartbeat queue file. Falls back to
    /// `$DEPLENS_HOME/offline_queue.jsonl` when unset.
    #[serde(default)]
    pub queue_file: Option<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**", "**/.next/**"]
        .map(String::from)
        .to_vec()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
            queue_file: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is
    /// invalid. Include patterns without wildcards are literal directory
    /// paths and are not validated as globs.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.includes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
