//! On-disk session and history persistence.
//!
//! The data dir holds two JSON files: `session.json`, the serialized state
//! of the one in-flight session, and `history.json`, the newest-first list
//! of completed reports capped at [`HISTORY_CAP`] entries. The core never
//! touches disk; everything file-shaped lives here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mockdrill_core::report::Report;
use mockdrill_core::session::SessionState;

/// Completed reports kept per data dir.
pub const HISTORY_CAP: usize = 20;

/// The persisted form of an in-flight session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    /// Bank file the question ids resolve against; `None` means built-in.
    #[serde(default)]
    pub bank: Option<PathBuf>,
    /// Full session snapshot.
    pub state: SessionState,
}

/// One completed session's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub report: Report,
}

impl HistoryEntry {
    pub fn new(report: Report) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            report,
        }
    }
}

fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join("session.json")
}

fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join("history.json")
}

/// Load the saved session, if any.
pub fn load_session(data_dir: &Path) -> Result<Option<SavedSession>> {
    let path = session_path(data_dir);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read session from {}", path.display()))?;
    let saved = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse session file {}", path.display()))?;
    Ok(Some(saved))
}

/// Persist the session, creating the data dir if needed.
pub fn save_session(data_dir: &Path, saved: &SavedSession) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
    let path = session_path(data_dir);
    let json = serde_json::to_string_pretty(saved).context("failed to serialize session")?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write session to {}", path.display()))?;
    Ok(())
}

/// Delete the saved session, if present.
pub fn clear_session(data_dir: &Path) -> Result<()> {
    let path = session_path(data_dir);
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to remove session file {}", path.display()))?;
    }
    Ok(())
}

/// Load the report history, newest first. A missing file is an empty list.
pub fn load_history(data_dir: &Path) -> Result<Vec<HistoryEntry>> {
    let path = history_path(data_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read history from {}", path.display()))?;
    let history = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse history file {}", path.display()))?;
    Ok(history)
}

/// Prepend an entry to the history, dropping the oldest past the cap.
pub fn push_history(data_dir: &Path, entry: HistoryEntry) -> Result<()> {
    let mut history = load_history(data_dir)?;
    history.insert(0, entry);
    history.truncate(HISTORY_CAP);

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
    let path = history_path(data_dir);
    let json = serde_json::to_string_pretty(&history).context("failed to serialize history")?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write history to {}", path.display()))?;
    Ok(())
}
