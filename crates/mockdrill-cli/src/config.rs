//! mockdrill configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mockdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockdrillConfig {
    /// Questions sampled per session, clamped to the bank size.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Directory holding session state and history.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Custom question bank used when no `--bank` flag is given.
    #[serde(default)]
    pub default_bank: Option<PathBuf>,
    /// Print per-question evaluations as soon as answers are scored.
    #[serde(default)]
    pub show_eval: bool,
}

fn default_question_count() -> usize {
    25
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./mockdrill-data")
}

impl Default for MockdrillConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            data_dir: default_data_dir(),
            default_bank: None,
            show_eval: false,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. The explicit path, if given (an error if it does not exist)
/// 2. `mockdrill.toml` in the current directory
/// 3. `~/.config/mockdrill/config.toml`
///
/// No file found means defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<MockdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mockdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global) = global_config_path() {
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(MockdrillConfig::default()),
    }
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("mockdrill")
            .join("config.toml")
    })
}
