//! The `mockdrill compare` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::store;

pub fn execute(
    data_dir: &Path,
    baseline: Option<usize>,
    current: Option<usize>,
    threshold: f64,
    format: String,
) -> Result<()> {
    let entries = store::load_history(data_dir)?;

    let current_idx = current.unwrap_or(0);
    let baseline_idx = baseline.unwrap_or(1);

    let fetch = |idx: usize| {
        entries.get(idx).with_context(|| {
            format!(
                "no history entry #{idx} ({} completed session(s) recorded)",
                entries.len()
            )
        })
    };
    let current_entry = fetch(current_idx)?;
    let baseline_entry = fetch(baseline_idx)?;

    let progress = current_entry.report.compare(&baseline_entry.report, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Comparing #{current_idx} ({}) against #{baseline_idx} ({})",
                current_entry.completed_at.format("%Y-%m-%d %H:%M"),
                baseline_entry.completed_at.format("%Y-%m-%d %H:%M"),
            );
            println!(
                "{} improved, {} regressed, {} unchanged (overall {:+.2})",
                progress.improvements.len(),
                progress.regressions.len(),
                progress.unchanged,
                progress.overall_delta,
            );

            if !progress.regressions.is_empty() {
                println!("\nRegressions:");
                for delta in &progress.regressions {
                    println!(
                        "  {} {:.2} -> {:.2} ({:+.2})",
                        delta.topic, delta.baseline_average, delta.current_average, delta.delta
                    );
                }
            }

            if !progress.improvements.is_empty() {
                println!("\nImprovements:");
                for delta in &progress.improvements {
                    println!(
                        "  {} {:.2} -> {:.2} ({:+.2})",
                        delta.topic, delta.baseline_average, delta.current_average, delta.delta
                    );
                }
            }

            if progress.new_topics > 0 {
                println!("\n{} new topic(s)", progress.new_topics);
            }
            if progress.dropped_topics > 0 {
                println!("{} dropped topic(s)", progress.dropped_topics);
            }
        }
    }

    Ok(())
}
