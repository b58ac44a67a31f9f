//! In-memory study session state.
//! Holds the working copy of the current topic and everything the user is
//! doing with it: selected tab, card position, flip state and quiz answers.

use super::{Flashcard, QuizAnswer, QuizQuestion, StudyTip, Topic};
use std::collections::BTreeMap;

/// Screens of the study app. Any tab can be selected from any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Create,
    Flashcards,
    Quiz,
    Tips,
    Saved,
}

/// Result of a submitted quiz. Only multiple-choice questions are graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total_mcq: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StudySession {
    pub tab: Tab,
    pub topic_name: String,
    pub notes: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub study_tips: Vec<StudyTip>,
    pub current_index: usize,
    pub is_flipped: bool,
    pub quiz_answers: BTreeMap<usize, QuizAnswer>,
    pub show_results: bool,
}

impl StudySession {
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.flashcards.get(self.current_index)
    }

    pub fn flip_card(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    pub fn next_card(&mut self) {
        if self.current_index + 1 < self.flashcards.len() {
            self.current_index += 1;
        }
        self.is_flipped = false;
    }

    pub fn previous_card(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
        self.is_flipped = false;
    }

    /// Records an answer. Ignored once results are shown or when `index`
    /// does not name a question.
    pub fn answer_question(&mut self, index: usize, answer: QuizAnswer) {
        if self.show_results || index >= self.quiz_questions.len() {
            return;
        }
        self.quiz_answers.insert(index, answer);
    }

    /// Locks the answers and returns the score.
    pub fn submit_quiz(&mut self) -> QuizScore {
        self.show_results = true;
        self.score()
    }

    pub fn retake_quiz(&mut self) {
        self.quiz_answers.clear();
        self.show_results = false;
    }

    pub fn score(&self) -> QuizScore {
        let correct = self
            .quiz_questions
            .iter()
            .enumerate()
            .filter(|(idx, question)| {
                self.quiz_answers
                    .get(idx)
                    .map(|answer| question.is_correct(answer))
                    .unwrap_or(false)
            })
            .count();

        QuizScore {
            correct,
            total_mcq: self.quiz_questions.iter().filter(|q| q.is_mcq()).count(),
        }
    }

    /// Replaces the generated artifacts and resets card and quiz progress.
    pub fn show_materials(
        &mut self,
        flashcards: Vec<Flashcard>,
        quiz_questions: Vec<QuizQuestion>,
        study_tips: Vec<StudyTip>,
    ) {
        self.flashcards = flashcards;
        self.quiz_questions = quiz_questions;
        self.study_tips = study_tips;
        self.current_index = 0;
        self.is_flipped = false;
        self.quiz_answers.clear();
        self.show_results = false;
        self.tab = Tab::Flashcards;
    }

    /// Shows a saved topic, including its original name and notes.
    pub fn show_topic(&mut self, topic: &Topic) {
        self.topic_name = topic.topic_name.clone();
        self.notes = topic.notes.clone();
        self.show_materials(
            topic.flashcards.clone(),
            topic.quiz_questions.clone(),
            topic.study_tips.clone(),
        );
    }
}
