//! Topic is a named set of notes together with everything generated from them
use super::{Flashcard, QuizQuestion, StudyTip};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    #[serde(rename = "topic")]
    pub topic_name: String,
    pub notes: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub study_tips: Vec<StudyTip>,
    pub created_at: DateTime<Utc>,
}

/// One line of the saved-topics list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub id: String,
    pub topic_name: String,
    pub created: String,
    pub flashcard_count: usize,
    pub quiz_question_count: usize,
    pub study_tip_count: usize,
}

impl Topic {
    pub fn summary(&self) -> TopicSummary {
        TopicSummary {
            id: self.id.clone(),
            topic_name: self.topic_name.clone(),
            created: format_created(self.created_at),
            flashcard_count: self.flashcards.len(),
            quiz_question_count: self.quiz_questions.len(),
            study_tip_count: self.study_tips.len(),
        }
    }
}

/// Formats a creation timestamp as a local YYYY-MM-DD string
fn format_created(time: DateTime<Utc>) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d").to_string()
}

impl std::fmt::Display for TopicSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (created {}): {} flashcards, {} quiz questions, {} study tips",
            self.topic_name,
            self.created,
            self.flashcard_count,
            self.quiz_question_count,
            self.study_tip_count
        )
    }
}
