//! Core data model types for mockdrill.
//!
//! These are the fundamental types the entire system uses to represent
//! interview questions, recorded answers, and evaluation output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject-matter category a question belongs to.
///
/// Variants are declared in the alphabetical order of their wire labels
/// ("Behavioral" < "CN" < "DSA" < "OS") so the derived `Ord` matches the
/// topic order reports iterate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Soft-skill and experience questions.
    Behavioral,
    /// Computer-networking fundamentals.
    #[serde(rename = "CN")]
    Networking,
    /// Algorithmic and data-structure reasoning.
    #[serde(rename = "DSA")]
    Algorithms,
    /// Operating-systems fundamentals.
    #[serde(rename = "OS")]
    OperatingSystems,
}

impl Topic {
    /// All topics, in report order.
    pub const ALL: [Topic; 4] = [
        Topic::Behavioral,
        Topic::Networking,
        Topic::Algorithms,
        Topic::OperatingSystems,
    ];

    /// The short label used in serialized data and terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Behavioral => "Behavioral",
            Topic::Networking => "CN",
            Topic::Algorithms => "DSA",
            Topic::OperatingSystems => "OS",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "behavioral" | "behavioural" | "soft-skills" => Ok(Topic::Behavioral),
            "cn" | "networking" | "networks" => Ok(Topic::Networking),
            "dsa" | "algorithms" | "data-structures" => Ok(Topic::Algorithms),
            "os" | "operating-systems" => Ok(Topic::OperatingSystems),
            other => Err(format!("unknown topic: {other}")),
        }
    }
}

/// A single interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within a bank.
    pub qid: u32,
    /// Subject-matter category.
    pub topic: Topic,
    /// The prompt put to the candidate.
    pub prompt: String,
    /// Keywords a strong answer is expected to mention. Matched
    /// case-insensitively as contiguous substrings; multi-word phrases must
    /// appear verbatim. Never shown to the candidate.
    pub expected_keywords: Vec<String>,
}

impl Question {
    /// The keyword-free projection that is safe to show the candidate.
    pub fn card(&self) -> QuestionCard {
        QuestionCard {
            qid: self.qid,
            topic: self.topic,
            prompt: self.prompt.clone(),
        }
    }
}

/// What the candidate sees: a question stripped of its expected keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCard {
    pub qid: u32,
    pub topic: Topic,
    pub prompt: String,
}

/// A named collection of questions, typically loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of the bank.
    #[serde(default)]
    pub description: String,
    /// The questions in this bank.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Output of scoring one answer against one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Integer score in `0..=10`.
    pub score: u8,
    /// Tiered coaching feedback.
    pub feedback: String,
    /// Expected keywords found in the answer, lowercased, in the order the
    /// question defines them.
    pub matched_keywords: Vec<String>,
}

/// A recorded answer to one question of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Id of the question that was answered.
    pub qid: u32,
    /// Topic of that question, denormalized for reporting.
    pub topic: Topic,
    /// Prompt of that question, denormalized for transcripts.
    pub prompt: String,
    /// The answer text exactly as submitted.
    pub answer: String,
    /// Integer score in `0..=10`.
    pub score: u8,
    /// Tiered coaching feedback.
    pub feedback: String,
    /// Expected keywords found in the answer.
    pub matched_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_display_and_parse() {
        assert_eq!(Topic::Algorithms.to_string(), "DSA");
        assert_eq!(Topic::Networking.to_string(), "CN");
        assert_eq!("dsa".parse::<Topic>().unwrap(), Topic::Algorithms);
        assert_eq!("Networking".parse::<Topic>().unwrap(), Topic::Networking);
        assert_eq!("OS".parse::<Topic>().unwrap(), Topic::OperatingSystems);
        assert_eq!("behavioral".parse::<Topic>().unwrap(), Topic::Behavioral);
        assert!("quantum".parse::<Topic>().is_err());
    }

    #[test]
    fn topic_order_matches_label_order() {
        let mut labels: Vec<&str> = Topic::ALL.iter().map(|t| t.label()).collect();
        let sorted = {
            let mut s = labels.clone();
            s.sort_unstable();
            s
        };
        assert_eq!(labels, sorted);
        labels.dedup();
        assert_eq!(labels.len(), Topic::ALL.len());
    }

    #[test]
    fn topic_serializes_to_wire_label() {
        assert_eq!(
            serde_json::to_string(&Topic::OperatingSystems).unwrap(),
            "\"OS\""
        );
        assert_eq!(
            serde_json::from_str::<Topic>("\"DSA\"").unwrap(),
            Topic::Algorithms
        );
    }

    #[test]
    fn card_drops_keywords() {
        let question = Question {
            qid: 7,
            topic: Topic::Networking,
            prompt: "What is the TCP three-way handshake?".into(),
            expected_keywords: vec!["syn".into(), "ack".into()],
        };
        let card = question.card();
        assert_eq!(card.qid, 7);
        assert_eq!(card.prompt, question.prompt);
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("syn"));
        assert!(!json.contains("keywords"));
    }

    #[test]
    fn response_serde_roundtrip() {
        let response = Response {
            qid: 1,
            topic: Topic::Algorithms,
            prompt: "Explain binary search.".into(),
            answer: "it needs a sorted array".into(),
            score: 4,
            feedback: "Answer is too shallow.".into(),
            matched_keywords: vec!["sorted".into()],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
