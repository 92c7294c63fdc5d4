//! The `mockdrill practice` command.
//!
//! Runs a whole session interactively in one process. Does not touch the
//! saved session, but the finished report does go into the history.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::commands::{print_evaluation, print_question, print_report, resolve_bank, sample_session};
use crate::config::MockdrillConfig;
use crate::store::{self, HistoryEntry};

pub fn execute(
    config: &MockdrillConfig,
    data_dir: &Path,
    count: Option<usize>,
    seed: Option<u64>,
    bank: Option<PathBuf>,
    show_eval: bool,
) -> Result<()> {
    let show_eval = show_eval || config.show_eval;
    let count = count.unwrap_or(config.question_count);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let bank_path = bank.or_else(|| config.default_bank.clone());
    let questions = resolve_bank(bank_path.as_deref())?;
    let mut session = sample_session(&questions, count, seed);

    println!(
        "Practice session: {} questions. One answer per line.",
        session.total()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_finished() {
        println!();
        print_question(&session)?;

        // EOF counts as an empty answer; the evaluator scores it zero.
        let answer = match lines.next() {
            Some(line) => line.context("failed to read answer")?,
            None => String::new(),
        };

        let response = session.submit_answer(&answer)?;
        if show_eval {
            print_evaluation(&response);
        }
    }

    let report = session.final_report();
    print_report(&report);
    store::push_history(data_dir, HistoryEntry::new(report))?;

    Ok(())
}
