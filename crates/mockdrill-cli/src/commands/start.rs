//! The `mockdrill start` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::commands::{print_question, resolve_bank, sample_session};
use crate::config::MockdrillConfig;
use crate::store::{self, SavedSession};

pub fn execute(
    config: &MockdrillConfig,
    data_dir: &Path,
    count: Option<usize>,
    seed: Option<u64>,
    bank: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let count = count.unwrap_or(config.question_count);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let bank_path = bank.or_else(|| config.default_bank.clone());
    let questions = resolve_bank(bank_path.as_deref())?;

    if let Some(saved) = store::load_session(data_dir)? {
        let answered = saved.state.responses.len();
        let total = saved.state.question_ids.len();
        if answered < total {
            tracing::info!("discarding unfinished session ({answered}/{total} answered)");
            eprintln!("Discarding unfinished session ({answered}/{total} answered).");
        }
    }

    let session = sample_session(&questions, count, seed);
    store::save_session(
        data_dir,
        &SavedSession {
            bank: bank_path,
            state: session.to_state(),
        },
    )?;

    if json {
        let first = session.current_question()?;
        let payload = serde_json::json!({
            "started": true,
            "total_questions": session.total(),
            "question_index": 1,
            "question": first.card(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Started a new session: {} questions.", session.total());
        println!();
        print_question(&session)?;
        println!("\nAnswer with: mockdrill answer \"your answer\"");
    }

    Ok(())
}
