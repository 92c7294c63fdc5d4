//! TOML question-bank parser.
//!
//! Loads custom question banks from TOML files and directories, and
//! validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionBank, Topic};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    qid: u32,
    topic: String,
    prompt: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let topic: Topic = q.topic.parse().map_err(|e: String| {
                anyhow::anyhow!("question {}: {}", q.qid, e)
            })?;
            Ok(Question {
                qid: q.qid,
                topic,
                prompt: q.prompt,
                expected_keywords: q.keywords,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub qid: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate qids
    let mut seen_ids = std::collections::HashSet::new();
    for question in &bank.questions {
        if !seen_ids.insert(question.qid) {
            warnings.push(ValidationWarning {
                qid: Some(question.qid),
                message: format!("duplicate question id: {}", question.qid),
            });
        }
    }

    // Check for empty prompts
    for question in &bank.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                qid: Some(question.qid),
                message: "prompt is empty".into(),
            });
        }
    }

    // A question without keywords can never earn the keyword share of its score
    for question in &bank.questions {
        if question.expected_keywords.is_empty() {
            warnings.push(ValidationWarning {
                qid: Some(question.qid),
                message: "no expected keywords, answers cannot score above the length share"
                    .into(),
            });
        }
    }

    // Check topic coverage
    for topic in Topic::ALL {
        if !bank.questions.iter().any(|q| q.topic == topic) {
            warnings.push(ValidationWarning {
                qid: None,
                message: format!("no questions for topic {topic}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::question_bank;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "systems-drill"
name = "Systems Drill"
description = "A small systems-heavy bank"

[[questions]]
qid = 1
topic = "OS"
prompt = "How does virtual memory work?"
keywords = ["paging", "page table", "swap", "frame"]

[[questions]]
qid = 2
topic = "DSA"
prompt = "Describe merge sort and its complexity."
keywords = ["divide and conquer", "merge", "o(n log n)", "stable"]

[[questions]]
qid = 3
topic = "CN"
prompt = "What is the TCP three-way handshake?"
keywords = ["syn", "ack", "sequence"]

[[questions]]
qid = 4
topic = "Behavioral"
prompt = "Describe a failure and what you learned from it."
keywords = ["ownership", "learning", "result"]
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.id, "systems-drill");
        assert_eq!(bank.name, "Systems Drill");
        assert_eq!(bank.questions.len(), 4);
        assert_eq!(bank.questions[0].topic, Topic::OperatingSystems);
        assert_eq!(
            bank.questions[1].expected_keywords,
            vec!["divide and conquer", "merge", "o(n log n)", "stable"]
        );
        assert!(validate_bank(&bank).is_empty());
    }

    #[test]
    fn topic_labels_parse_case_insensitively() {
        let toml = r#"
[bank]
id = "aliases"
name = "Aliases"

[[questions]]
qid = 1
topic = "networking"
prompt = "Explain subnetting."
keywords = ["cidr"]
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.questions[0].topic, Topic::Networking);
    }

    #[test]
    fn unknown_topic_is_a_parse_error() {
        let toml = r#"
[bank]
id = "bad-topic"
name = "Bad Topic"

[[questions]]
qid = 1
topic = "astrology"
prompt = "Explain retrogrades."
keywords = ["mercury"]
"#;
        let err = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown topic"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_bank_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_duplicate_ids_and_empty_fields() {
        let toml = r#"
[bank]
id = "dupes"
name = "Dupes"

[[questions]]
qid = 1
topic = "DSA"
prompt = "Explain two-pointer technique."
keywords = ["left", "right"]

[[questions]]
qid = 1
topic = "DSA"
prompt = ""
keywords = []
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("prompt is empty")));
        assert!(warnings.iter().any(|w| w.message.contains("no expected keywords")));
        assert!(warnings
            .iter()
            .any(|w| w.qid.is_none() && w.message.contains("no questions for topic")));
    }

    #[test]
    fn builtin_bank_validates_clean() {
        let bank = QuestionBank {
            id: "builtin".into(),
            name: "Built-in".into(),
            description: String::new(),
            questions: question_bank(),
        };
        assert!(validate_bank(&bank).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(nested.join("broken.toml"), "not toml at all [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].id, "systems-drill");
    }
}
