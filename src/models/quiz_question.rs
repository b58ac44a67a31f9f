//! Quiz questions and the answers a learner records for them.
use serde::{Deserialize, Serialize};

/// A generated quiz question, stored with a `type` tag of `open` or `mcq`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuizQuestion {
    Open {
        question: String,
        answer: String,
    },
    Mcq {
        question: String,
        options: Vec<String>,
        #[serde(rename = "correctAnswer")]
        correct_answer: usize,
    },
}

impl QuizQuestion {
    pub fn question(&self) -> &str {
        match self {
            QuizQuestion::Open { question, .. } | QuizQuestion::Mcq { question, .. } => question,
        }
    }

    pub fn is_mcq(&self) -> bool {
        matches!(self, QuizQuestion::Mcq { .. })
    }

    /// Only multiple-choice questions are graded; open answers never count.
    pub fn is_correct(&self, answer: &QuizAnswer) -> bool {
        match (self, answer) {
            (QuizQuestion::Mcq { correct_answer, .. }, QuizAnswer::Choice(choice)) => {
                choice == correct_answer
            }
            _ => false,
        }
    }
}

/// What the learner entered for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAnswer {
    /// Selected option index of a multiple-choice question
    Choice(usize),
    /// Free-text response to an open question
    Text(String),
}
