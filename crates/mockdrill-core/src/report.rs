//! Report compilation and progress comparison.
//!
//! `compile_report` is a pure function of the recorded responses: the same
//! input always produces the same report, and topics iterate in wire-label
//! order so output is reproducible byte for byte.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Response, Topic};

/// Aggregated scoring summary over one session's responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Mean of all response scores, rounded to 2 decimals. Response-weighted:
    /// topics with more questions weigh proportionally more.
    pub overall_score: f64,
    /// Tiered summary feedback.
    pub overall_feedback: String,
    /// Per-topic aggregates, keyed in wire-label order.
    pub topic_breakdown: BTreeMap<Topic, TopicBreakdown>,
}

/// Aggregates for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicBreakdown {
    /// Mean score of this topic's responses, rounded to 2 decimals.
    pub average: f64,
    /// Number of responses in this topic.
    pub count: usize,
    /// Tiered per-topic feedback.
    pub feedback: String,
}

/// Round to 2 decimal places, ties away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(scores: &[u8]) -> f64 {
    scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
}

/// Compile an aggregate report from recorded responses.
///
/// Empty input yields a zero report with an empty breakdown.
pub fn compile_report(responses: &[Response]) -> Report {
    if responses.is_empty() {
        return Report {
            overall_score: 0.0,
            overall_feedback: "No responses submitted.".to_string(),
            topic_breakdown: BTreeMap::new(),
        };
    }

    let mut by_topic: BTreeMap<Topic, Vec<u8>> = BTreeMap::new();
    for response in responses {
        by_topic.entry(response.topic).or_default().push(response.score);
    }

    let topic_breakdown = by_topic
        .into_iter()
        .map(|(topic, scores)| {
            let average = round2(mean(&scores));
            let feedback = if average >= 8.0 {
                "Strong performance in this topic. Keep answers concise and example-driven."
            } else if average >= 6.0 {
                "Good baseline. Add deeper reasoning and clearer structure for better impact."
            } else {
                "Needs improvement. Revisit fundamentals and practice with concrete examples."
            };
            let breakdown = TopicBreakdown {
                average,
                count: scores.len(),
                feedback: feedback.to_string(),
            };
            (topic, breakdown)
        })
        .collect();

    let all_scores: Vec<u8> = responses.iter().map(|r| r.score).collect();
    let overall_score = round2(mean(&all_scores));
    let overall_feedback = if overall_score >= 8.0 {
        "Interview performance is strong. Keep practicing concise delivery."
    } else if overall_score >= 6.0 {
        "Interview performance is moderate. Improve depth and structure in answers."
    } else {
        "Interview performance needs improvement. Focus on fundamentals and STAR framing."
    };

    Report {
        overall_score,
        overall_feedback: overall_feedback.to_string(),
        topic_breakdown,
    }
}

impl Report {
    /// Compare this report against an earlier baseline.
    ///
    /// A topic counts as improved or regressed when its average moved by
    /// more than `threshold` points (on the 0..=10 scale).
    pub fn compare(&self, baseline: &Report, threshold: f64) -> ProgressReport {
        let mut improvements = Vec::new();
        let mut regressions = Vec::new();
        let mut unchanged = 0usize;
        let mut new_topics = 0usize;

        for (topic, current) in &self.topic_breakdown {
            let Some(base) = baseline.topic_breakdown.get(topic) else {
                new_topics += 1;
                continue;
            };
            let delta = round2(current.average - base.average);
            let entry = TopicDelta {
                topic: *topic,
                baseline_average: base.average,
                current_average: current.average,
                delta,
            };
            if delta > threshold {
                improvements.push(entry);
            } else if delta < -threshold {
                regressions.push(entry);
            } else {
                unchanged += 1;
            }
        }

        let dropped_topics = baseline
            .topic_breakdown
            .keys()
            .filter(|t| !self.topic_breakdown.contains_key(t))
            .count();

        ProgressReport {
            improvements,
            regressions,
            unchanged,
            new_topics,
            dropped_topics,
            overall_delta: round2(self.overall_score - baseline.overall_score),
        }
    }
}

/// Result of comparing two reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Topics whose average went up by more than the threshold.
    pub improvements: Vec<TopicDelta>,
    /// Topics whose average went down by more than the threshold.
    pub regressions: Vec<TopicDelta>,
    /// Topics with no significant change.
    pub unchanged: usize,
    /// Topics present now but not in the baseline.
    pub new_topics: usize,
    /// Topics present in the baseline but not now.
    pub dropped_topics: usize,
    /// Overall score movement, rounded to 2 decimals.
    pub overall_delta: f64,
}

/// One topic's average movement between two reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDelta {
    pub topic: Topic,
    pub baseline_average: f64,
    pub current_average: f64,
    pub delta: f64,
}

impl ProgressReport {
    /// Returns true if any topic regressed.
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty()
    }

    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improved, {} regressed, {} unchanged (overall {:+.2})\n\n",
            self.improvements.len(),
            self.regressions.len(),
            self.unchanged,
            self.overall_delta,
        ));

        let table = |md: &mut String, title: &str, deltas: &[TopicDelta]| {
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Topic | Baseline | Current | Delta |\n");
            md.push_str("|-------|----------|---------|-------|\n");
            for d in deltas {
                md.push_str(&format!(
                    "| {} | {:.2} | {:.2} | {:+.2} |\n",
                    d.topic, d.baseline_average, d.current_average, d.delta
                ));
            }
            md.push('\n');
        };

        if !self.regressions.is_empty() {
            table(&mut md, "Regressions", &self.regressions);
        }
        if !self.improvements.is_empty() {
            table(&mut md, "Improvements", &self.improvements);
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(topic: Topic, score: u8) -> Response {
        Response {
            qid: 1,
            topic,
            prompt: "prompt".into(),
            answer: "answer".into(),
            score,
            feedback: "feedback".into(),
            matched_keywords: vec![],
        }
    }

    #[test]
    fn empty_responses_give_zero_report() {
        let report = compile_report(&[]);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.overall_feedback, "No responses submitted.");
        assert!(report.topic_breakdown.is_empty());
    }

    #[test]
    fn overall_is_response_weighted_not_topic_weighted() {
        let responses = vec![
            response(Topic::Algorithms, 10),
            response(Topic::Algorithms, 10),
            response(Topic::Networking, 0),
        ];
        let report = compile_report(&responses);
        // (10 + 10 + 0) / 3, not (10 + 0) / 2
        assert_eq!(report.overall_score, 6.67);
        assert_eq!(report.topic_breakdown[&Topic::Algorithms].average, 10.0);
        assert_eq!(report.topic_breakdown[&Topic::Algorithms].count, 2);
        assert_eq!(report.topic_breakdown[&Topic::Networking].average, 0.0);
        assert_eq!(report.topic_breakdown[&Topic::Networking].count, 1);
    }

    #[test]
    fn feedback_tiers_at_topic_and_overall_level() {
        let strong = compile_report(&[response(Topic::Behavioral, 9)]);
        assert!(strong.overall_feedback.contains("strong"));
        assert!(strong.topic_breakdown[&Topic::Behavioral]
            .feedback
            .contains("Strong performance"));

        let moderate = compile_report(&[response(Topic::Behavioral, 6)]);
        assert!(moderate.overall_feedback.contains("moderate"));
        assert!(moderate.topic_breakdown[&Topic::Behavioral]
            .feedback
            .contains("Good baseline"));

        let weak = compile_report(&[response(Topic::Behavioral, 2)]);
        assert!(weak.overall_feedback.contains("needs improvement"));
        assert!(weak.topic_breakdown[&Topic::Behavioral]
            .feedback
            .contains("Needs improvement"));
    }

    #[test]
    fn identical_inputs_give_identical_json() {
        let responses = vec![
            response(Topic::OperatingSystems, 7),
            response(Topic::Algorithms, 4),
            response(Topic::Networking, 9),
        ];
        let a = serde_json::to_string(&compile_report(&responses)).unwrap();
        let b = serde_json::to_string(&compile_report(&responses)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn topic_keys_serialize_in_wire_label_order() {
        let responses = vec![
            response(Topic::OperatingSystems, 5),
            response(Topic::Behavioral, 5),
            response(Topic::Algorithms, 5),
            response(Topic::Networking, 5),
        ];
        let json = serde_json::to_string(&compile_report(&responses)).unwrap();
        let behavioral = json.find("\"Behavioral\"").unwrap();
        let cn = json.find("\"CN\"").unwrap();
        let dsa = json.find("\"DSA\"").unwrap();
        let os = json.find("\"OS\"").unwrap();
        assert!(behavioral < cn && cn < dsa && dsa < os);
    }

    #[test]
    fn compare_classifies_deltas_around_threshold() {
        let baseline = compile_report(&[
            response(Topic::Algorithms, 4),
            response(Topic::Networking, 8),
            response(Topic::Behavioral, 6),
        ]);
        let current = compile_report(&[
            response(Topic::Algorithms, 8),
            response(Topic::Networking, 4),
            response(Topic::Behavioral, 6),
        ]);

        let progress = current.compare(&baseline, 0.5);
        assert_eq!(progress.improvements.len(), 1);
        assert_eq!(progress.improvements[0].topic, Topic::Algorithms);
        assert_eq!(progress.improvements[0].delta, 4.0);
        assert_eq!(progress.regressions.len(), 1);
        assert_eq!(progress.regressions[0].topic, Topic::Networking);
        assert_eq!(progress.unchanged, 1);
        assert!(progress.has_regressions());
        assert_eq!(progress.overall_delta, 0.0);
    }

    #[test]
    fn compare_counts_new_and_dropped_topics() {
        let baseline = compile_report(&[response(Topic::Networking, 5)]);
        let current = compile_report(&[response(Topic::Algorithms, 5)]);

        let progress = current.compare(&baseline, 0.5);
        assert_eq!(progress.new_topics, 1);
        assert_eq!(progress.dropped_topics, 1);
        assert_eq!(progress.improvements.len(), 0);
        assert!(!progress.has_regressions());
    }

    #[test]
    fn markdown_output_lists_moved_topics() {
        let baseline = compile_report(&[response(Topic::Algorithms, 8)]);
        let current = compile_report(&[response(Topic::Algorithms, 3)]);

        let md = current.compare(&baseline, 0.5).to_markdown();
        assert!(md.contains("Regressions"));
        assert!(md.contains("DSA"));
        assert!(md.contains("-5.00"));
    }
}
