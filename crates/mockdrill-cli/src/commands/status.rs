//! The `mockdrill status` command.

use std::path::Path;

use anyhow::Result;

use crate::commands::{load_active_session, print_question};

pub fn execute(data_dir: &Path, json: bool) -> Result<()> {
    let (session, _) = load_active_session(data_dir)?;

    if json {
        let question = if session.is_finished() {
            None
        } else {
            Some(session.current_question()?.card())
        };
        let payload = serde_json::json!({
            "answered": session.position(),
            "total_questions": session.total(),
            "finished": session.is_finished(),
            "question": question,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Answered {}/{}.", session.position(), session.total());
    if session.is_finished() {
        println!("Session finished. Run `mockdrill report`.");
    } else {
        println!();
        print_question(&session)?;
    }

    Ok(())
}
