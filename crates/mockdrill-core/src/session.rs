//! The interview session state machine.
//!
//! A session owns a fixed question sequence, a cursor, and the responses
//! recorded so far. It is `Active` while the cursor is inside the sequence
//! and `Finished` once every question has been answered; there is no way
//! back. Sessions are plain values: snapshot with [`InterviewSession::to_state`],
//! persist wherever the caller likes, and rebuild with
//! [`InterviewSession::from_state`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::{find_question, question_bank, sample_questions};
use crate::error::SessionError;
use crate::evaluator::evaluate_answer;
use crate::model::{Question, Response};
use crate::report::{compile_report, Report};

/// Questions sampled for a fresh session, clamped to the bank size.
pub const DEFAULT_QUESTION_COUNT: usize = 25;

/// Plain serializable snapshot of a session.
///
/// Carries question ids rather than full questions so persisted state never
/// contains expected keywords; [`InterviewSession::from_state`] resolves
/// the ids against a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The sampled question ids, in session order.
    pub question_ids: Vec<u32>,
    /// 0-based cursor; equals the number of responses.
    pub index: usize,
    /// Responses recorded so far, one per answered question.
    pub responses: Vec<Response>,
}

/// One in-progress or completed interview.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    questions: Vec<Question>,
    index: usize,
    responses: Vec<Response>,
}

impl InterviewSession {
    /// Start a fresh session over the built-in bank with a thread-local RNG.
    pub fn start() -> Self {
        let bank = question_bank();
        let mut rng = rand::thread_rng();
        Self::sample_with(&bank, DEFAULT_QUESTION_COUNT, &mut rng)
    }

    /// Start a session by sampling `count` questions from `bank`.
    pub fn sample_with<R: Rng>(bank: &[Question], count: usize, rng: &mut R) -> Self {
        Self::from_questions(sample_questions(bank, count, rng))
    }

    /// Build a session over an explicit question sequence.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            responses: Vec::new(),
        }
    }

    /// Rebuild a session from a snapshot, resolving question ids against
    /// `bank`.
    ///
    /// Reconstruction is strict: a qid missing from the bank is rejected
    /// with [`SessionError::UnknownQuestion`] rather than silently dropped,
    /// since dropping would shrink the fixed-length question sequence and
    /// hide data corruption. A cursor that disagrees with the recorded
    /// responses is rejected as [`SessionError::CorruptState`].
    pub fn from_state(state: SessionState, bank: &[Question]) -> Result<Self, SessionError> {
        if state.index != state.responses.len() {
            return Err(SessionError::CorruptState(format!(
                "index is {} but {} responses are recorded",
                state.index,
                state.responses.len()
            )));
        }
        if state.index > state.question_ids.len() {
            return Err(SessionError::CorruptState(format!(
                "index {} is past the {} sampled questions",
                state.index,
                state.question_ids.len()
            )));
        }

        let questions = state
            .question_ids
            .iter()
            .map(|&qid| {
                find_question(bank, qid)
                    .cloned()
                    .ok_or(SessionError::UnknownQuestion { qid })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            questions,
            index: state.index,
            responses: state.responses,
        })
    }

    /// Snapshot the full session state as a plain serializable value.
    pub fn to_state(&self) -> SessionState {
        SessionState {
            question_ids: self.questions.iter().map(|q| q.qid).collect(),
            index: self.index,
            responses: self.responses.clone(),
        }
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.questions.get(self.index).ok_or(SessionError::Finished {
            answered: self.responses.len(),
        })
    }

    /// Score `answer` against the current question, record the response,
    /// and advance the cursor.
    ///
    /// Always returns the recorded response; whether the caller shows the
    /// evaluation to the interviewee right away or only in the final report
    /// is the caller's policy.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Response, SessionError> {
        let question = self.current_question()?;
        let evaluation = evaluate_answer(question, answer);
        let response = Response {
            qid: question.qid,
            topic: question.topic,
            prompt: question.prompt.clone(),
            answer: answer.to_string(),
            score: evaluation.score,
            feedback: evaluation.feedback,
            matched_keywords: evaluation.matched_keywords,
        };
        self.responses.push(response.clone());
        self.index += 1;
        Ok(response)
    }

    /// True once every question has been answered.
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// 0-based cursor position; equals the number of answers recorded.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Number of questions in this session.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The responses recorded so far.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// The sampled question sequence.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Compile the report over the responses so far. Valid at any point;
    /// before `Finished` it covers the answered prefix.
    pub fn final_report(&self) -> Report {
        compile_report(&self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn tiny_bank() -> Vec<Question> {
        vec![
            Question {
                qid: 1,
                topic: Topic::Algorithms,
                prompt: "Explain binary search.".into(),
                expected_keywords: vec!["sorted".into(), "o(log n)".into()],
            },
            Question {
                qid: 2,
                topic: Topic::Networking,
                prompt: "What is the TCP three-way handshake?".into(),
                expected_keywords: vec!["syn".into(), "ack".into()],
            },
            Question {
                qid: 3,
                topic: Topic::OperatingSystems,
                prompt: "What is a process vs a thread?".into(),
                expected_keywords: vec!["address space".into(), "lightweight".into()],
            },
        ]
    }

    #[test]
    fn fresh_session_samples_default_count() {
        let session = InterviewSession::start();
        assert_eq!(session.total(), DEFAULT_QUESTION_COUNT);
        assert_eq!(session.position(), 0);
        assert!(!session.is_finished());
        let ids: HashSet<u32> = session.questions().iter().map(|q| q.qid).collect();
        assert_eq!(ids.len(), session.total());
    }

    #[test]
    fn small_bank_clamps_session_length() {
        let bank = tiny_bank();
        let mut rng = StdRng::seed_from_u64(3);
        let session = InterviewSession::sample_with(&bank, DEFAULT_QUESTION_COUNT, &mut rng);
        assert_eq!(session.total(), bank.len());
    }

    #[test]
    fn answering_everything_finishes_the_session() {
        let mut session = InterviewSession::from_questions(tiny_bank());

        for i in 0..3 {
            assert!(!session.is_finished());
            let response = session.submit_answer("syn ack on a sorted address space").unwrap();
            assert_eq!(session.position(), i + 1);
            assert_eq!(response.qid, session.questions()[i].qid);
        }

        assert!(session.is_finished());
        assert_eq!(session.responses().len(), 3);

        let err = session.current_question().unwrap_err();
        assert_eq!(err, SessionError::Finished { answered: 3 });
        let err = session.submit_answer("one more").unwrap_err();
        assert!(err.is_finished());
        // the failed submit must not have recorded anything
        assert_eq!(session.responses().len(), 3);
    }

    #[test]
    fn response_carries_evaluation_and_metadata() {
        let mut session = InterviewSession::from_questions(tiny_bank());
        let response = session
            .submit_answer("binary search needs a sorted array, o(log n) steps")
            .unwrap();
        assert_eq!(response.qid, 1);
        assert_eq!(response.topic, Topic::Algorithms);
        assert!(response.score > 0);
        assert_eq!(
            response.matched_keywords,
            vec!["sorted".to_string(), "o(log n)".into()]
        );
    }

    #[test]
    fn state_round_trip_preserves_everything() {
        let bank = tiny_bank();
        let mut session = InterviewSession::from_questions(bank.clone());
        session.submit_answer("syn and ack").unwrap();

        let state = session.to_state();
        let rebuilt = InterviewSession::from_state(state.clone(), &bank).unwrap();

        assert_eq!(rebuilt.position(), session.position());
        assert_eq!(rebuilt.responses(), session.responses());
        assert_eq!(rebuilt.questions(), session.questions());
        assert_eq!(rebuilt.to_state(), state);
    }

    #[test]
    fn state_survives_json() {
        let bank = tiny_bank();
        let mut session = InterviewSession::from_questions(bank.clone());
        session.submit_answer("first answer").unwrap();

        let json = serde_json::to_string(&session.to_state()).unwrap();
        assert!(!json.contains("expected_keywords"));
        let state: SessionState = serde_json::from_str(&json).unwrap();
        let rebuilt = InterviewSession::from_state(state, &bank).unwrap();
        assert_eq!(rebuilt.position(), 1);
        assert_eq!(rebuilt.current_question().unwrap().qid, 2);
    }

    #[test]
    fn unknown_qid_is_rejected_not_shrunk() {
        let state = SessionState {
            question_ids: vec![1, 99, 3],
            index: 0,
            responses: vec![],
        };
        let err = InterviewSession::from_state(state, &tiny_bank()).unwrap_err();
        assert_eq!(err, SessionError::UnknownQuestion { qid: 99 });
    }

    #[test]
    fn inconsistent_cursor_is_rejected() {
        let state = SessionState {
            question_ids: vec![1, 2],
            index: 1,
            responses: vec![],
        };
        let err = InterviewSession::from_state(state, &tiny_bank()).unwrap_err();
        assert!(matches!(err, SessionError::CorruptState(_)));

        let state = SessionState {
            question_ids: vec![1],
            index: 2,
            responses: vec![],
        };
        let err = InterviewSession::from_state(state, &tiny_bank()).unwrap_err();
        assert!(matches!(err, SessionError::CorruptState(_)));
    }

    #[test]
    fn partial_report_covers_answered_prefix() {
        let mut session = InterviewSession::from_questions(tiny_bank());
        assert_eq!(session.final_report().overall_score, 0.0);

        session.submit_answer("sorted array, o(log n)").unwrap();
        let report = session.final_report();
        assert_eq!(report.topic_breakdown.len(), 1);
        assert!(report.topic_breakdown.contains_key(&Topic::Algorithms));
    }

    #[test]
    fn identical_answer_sequences_give_identical_reports() {
        let answers = ["syn ack", "", "address space and lightweight threads"];
        let run = || {
            let mut session = InterviewSession::from_questions(tiny_bank());
            for answer in answers {
                session.submit_answer(answer).unwrap();
            }
            serde_json::to_string(&session.final_report()).unwrap()
        };
        assert_eq!(run(), run());
    }
}
