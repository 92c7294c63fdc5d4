//! The `mockdrill answer` command.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::{load_active_session, print_evaluation, print_question, print_report};
use crate::config::MockdrillConfig;
use crate::store::{self, HistoryEntry, SavedSession};

pub fn execute(
    config: &MockdrillConfig,
    data_dir: &Path,
    text: Option<String>,
    show_eval: bool,
    json: bool,
) -> Result<()> {
    let show_eval = show_eval || config.show_eval;
    let (mut session, saved) = load_active_session(data_dir)?;

    // The boundary synthesizes the "already finished" response instead of
    // surfacing the core's precondition error.
    if session.is_finished() {
        let report = session.final_report();
        if json {
            let payload = serde_json::json!({ "finished": true, "report": report });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("Session already finished.");
            print_report(&report);
        }
        return Ok(());
    }

    let answer = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read answer from stdin")?;
            buf
        }
    };

    let response = session.submit_answer(&answer)?;
    store::save_session(
        data_dir,
        &SavedSession {
            bank: saved.bank.clone(),
            state: session.to_state(),
        },
    )?;

    let evaluation = serde_json::json!({
        "score": response.score,
        "feedback": response.feedback.clone(),
        "matched_keywords": response.matched_keywords.clone(),
    });

    if session.is_finished() {
        let report = session.final_report();
        store::push_history(data_dir, HistoryEntry::new(report.clone()))?;
        store::clear_session(data_dir)?;

        if json {
            let mut payload = serde_json::json!({ "finished": true, "report": report });
            if show_eval {
                payload["evaluation"] = evaluation;
            }
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            if show_eval {
                print_evaluation(&response);
            }
            println!("Session finished.");
            print_report(&report);
        }
        return Ok(());
    }

    if json {
        let next = session.current_question()?;
        let mut payload = serde_json::json!({
            "finished": false,
            "question_index": session.position() + 1,
            "total_questions": session.total(),
            "question": next.card(),
        });
        if show_eval {
            payload["evaluation"] = evaluation;
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        if show_eval {
            print_evaluation(&response);
            println!();
        }
        print_question(&session)?;
    }

    Ok(())
}
