//! Flashcard is a <question, answer> pair derived from a topic's notes
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    /// Name of the owning topic, copied onto every card
    #[serde(rename = "topic")]
    pub topic_name: String,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        topic_name: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            topic_name: topic_name.into(),
        }
    }
}
