//! The `mockdrill history` command.

use std::path::Path;

use anyhow::Result;

use crate::store;

pub fn execute(data_dir: &Path, json: bool, limit: Option<usize>) -> Result<()> {
    let mut entries = store::load_history(data_dir)?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No completed sessions yet.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "#{i}  {}  overall {:.2}  ({} topic(s))",
            entry.completed_at.format("%Y-%m-%d %H:%M"),
            entry.report.overall_score,
            entry.report.topic_breakdown.len(),
        );
    }

    Ok(())
}
