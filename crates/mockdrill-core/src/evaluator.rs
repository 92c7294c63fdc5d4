//! Keyword-overlap answer scoring.
//!
//! The score blends two signals: the fraction of expected keywords found in
//! the answer, and how close the answer length comes to a target word
//! count. No semantic analysis happens here.

use crate::model::{Evaluation, Question};

/// Weight of the keyword-overlap signal in the blended score.
pub const KEYWORD_WEIGHT: f64 = 0.7;

/// Weight of the answer-length signal in the blended score.
pub const LENGTH_WEIGHT: f64 = 0.3;

/// Word count at which the length signal saturates at 1.0.
pub const TARGET_WORD_COUNT: usize = 60;

/// Feedback returned for an empty or whitespace-only answer.
pub const NO_ANSWER_FEEDBACK: &str =
    "No answer captured. Try speaking clearly and include key concepts.";

/// Score one answer against one question.
///
/// Keywords match as contiguous substrings of the trimmed, lowercased
/// answer; multi-word phrases must appear verbatim. The blended score is
/// scaled to 0..=10 and rounded with `f64::round`, which rounds ties away
/// from zero. Empty input is a normal zero-score result, not an error.
pub fn evaluate_answer(question: &Question, answer: &str) -> Evaluation {
    let normalized = answer.trim().to_lowercase();
    if normalized.is_empty() {
        return Evaluation {
            score: 0,
            feedback: NO_ANSWER_FEEDBACK.to_string(),
            matched_keywords: Vec::new(),
        };
    }

    let keywords: Vec<String> = question
        .expected_keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect();
    let matched: Vec<String> = keywords
        .iter()
        .filter(|k| normalized.contains(k.as_str()))
        .cloned()
        .collect();

    let keyword_ratio = matched.len() as f64 / keywords.len().max(1) as f64;
    let word_count = normalized.split_whitespace().count();
    let length_score = (word_count as f64 / TARGET_WORD_COUNT as f64).min(1.0);

    let raw = KEYWORD_WEIGHT * keyword_ratio + LENGTH_WEIGHT * length_score;
    let score = (raw * 10.0).round().clamp(0.0, 10.0) as u8;

    let feedback = if score >= 8 {
        "Strong answer with good coverage of core ideas."
    } else if score >= 5 {
        "Decent answer. Add more technical detail and concrete terminology."
    } else {
        "Answer is too shallow. Cover definitions, mechanism, and one example."
    };

    Evaluation {
        score,
        feedback: feedback.to_string(),
        matched_keywords: matched,
    }
}
