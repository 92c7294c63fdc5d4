//! The `mockdrill report` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use mockdrill_report::html::write_html_report;
use mockdrill_report::json::write_json_report;

use crate::commands::{load_active_session, print_report};

pub fn execute(
    data_dir: &Path,
    json: bool,
    html: Option<PathBuf>,
    save: Option<PathBuf>,
) -> Result<()> {
    let (session, _) = load_active_session(data_dir)?;
    let report = session.final_report();

    if let Some(path) = &html {
        write_html_report(&report, session.responses(), path)?;
        eprintln!("HTML report: {}", path.display());
    }
    if let Some(path) = &save {
        write_json_report(&report, path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !session.is_finished() {
            println!(
                "Partial report over {} of {} questions.",
                session.position(),
                session.total()
            );
        }
        print_report(&report);
    }

    Ok(())
}
