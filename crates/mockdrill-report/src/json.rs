//! JSON report persistence.

use std::path::Path;

use anyhow::{Context, Result};

use mockdrill_core::report::Report;

/// Save a report as pretty-printed JSON, creating parent directories.
pub fn write_json_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

/// Load a report from a JSON file.
pub fn read_json_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report from {}", path.display()))?;
    let report: Report = serde_json::from_str(&content).context("failed to parse report JSON")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockdrill_core::model::{Response, Topic};
    use mockdrill_core::report::compile_report;

    #[test]
    fn json_roundtrip() {
        let responses = vec![Response {
            qid: 15,
            topic: Topic::OperatingSystems,
            prompt: "What is a process vs a thread?".into(),
            answer: "threads share the address space".into(),
            score: 5,
            feedback: "Decent answer.".into(),
            matched_keywords: vec!["address space".into()],
        }];
        let report = compile_report(&responses);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("report.json");

        write_json_report(&report, &path).unwrap();
        let loaded = read_json_report(&path).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn read_missing_file_has_path_context() {
        let err = read_json_report(Path::new("/no/such/report.json")).unwrap_err();
        assert!(format!("{err:#}").contains("report.json"));
    }
}
