//! One module per subcommand, plus rendering helpers they share.

pub mod answer;
pub mod compare;
pub mod history;
pub mod init;
pub mod practice;
pub mod report;
pub mod start;
pub mod status;
pub mod topics;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mockdrill_core::bank::question_bank;
use mockdrill_core::model::{Question, Response};
use mockdrill_core::parser;
use mockdrill_core::report::Report;
use mockdrill_core::session::InterviewSession;

use crate::store;

/// Resolve the questions to drill: a custom bank file, or the built-in
/// catalog when no path is given.
pub(crate) fn resolve_bank(path: Option<&Path>) -> Result<Vec<Question>> {
    match path {
        Some(p) => {
            let bank = parser::parse_bank(p)?;
            anyhow::ensure!(
                !bank.questions.is_empty(),
                "question bank {} has no questions",
                p.display()
            );
            Ok(bank.questions)
        }
        None => Ok(question_bank()),
    }
}

/// Sample a fresh session, seeded when the caller wants reproducibility.
pub(crate) fn sample_session(
    questions: &[Question],
    count: usize,
    seed: Option<u64>,
) -> InterviewSession {
    match seed {
        Some(s) => {
            let mut rng = StdRng::seed_from_u64(s);
            InterviewSession::sample_with(questions, count, &mut rng)
        }
        None => {
            let mut rng = rand::thread_rng();
            InterviewSession::sample_with(questions, count, &mut rng)
        }
    }
}

/// Load the saved session and rebuild it against its recorded bank.
pub(crate) fn load_active_session(
    data_dir: &Path,
) -> Result<(InterviewSession, store::SavedSession)> {
    let saved = store::load_session(data_dir)?
        .ok_or_else(|| anyhow::anyhow!("no active session; run `mockdrill start` first"))?;
    let questions = resolve_bank(saved.bank.as_deref())?;
    let session = InterviewSession::from_state(saved.state.clone(), &questions)
        .context("saved session no longer matches its question bank; run `mockdrill start`")?;
    Ok((session, saved))
}

/// Print the current question card: position, topic, prompt.
pub(crate) fn print_question(session: &InterviewSession) -> Result<()> {
    let question = session.current_question()?;
    println!(
        "Question {}/{} [{}]",
        session.position() + 1,
        session.total(),
        question.topic
    );
    println!("{}", question.prompt);
    Ok(())
}

/// Print one answer's evaluation. Never includes the expected keywords
/// themselves, only how many matched.
pub(crate) fn print_evaluation(response: &Response) {
    println!(
        "Score {}/10 ({} keyword(s) matched): {}",
        response.score,
        response.matched_keywords.len(),
        response.feedback
    );
}

/// Render a report as a summary table plus the overall verdict.
pub(crate) fn print_report(report: &Report) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Average", "Questions", "Feedback"]);

    for (topic, breakdown) in &report.topic_breakdown {
        table.add_row(vec![
            Cell::new(topic),
            Cell::new(format!("{:.2}", breakdown.average)),
            Cell::new(breakdown.count),
            Cell::new(&breakdown.feedback),
        ]);
    }

    println!("\n{table}");
    println!("Overall score: {:.2} / 10", report.overall_score);
    println!("{}", report.overall_feedback);
}
