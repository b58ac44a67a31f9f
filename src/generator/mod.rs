//! Turns raw notes into study materials.
//!
//! The segmenter runs once; the flashcard, quiz and tip synthesizers each
//! work off its output independently.

pub mod flashcards;
pub mod quiz;
pub mod segmenter;
pub mod tips;

pub use flashcards::generate_flashcards;
pub use quiz::generate_quiz;
pub use segmenter::{Segments, segment};
pub use tips::generate_study_tips;

use crate::models::{Flashcard, QuizQuestion, StudyTip};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaterials {
    pub flashcards: Vec<Flashcard>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub study_tips: Vec<StudyTip>,
}

pub fn generate_materials<R: Rng + ?Sized>(
    topic_name: &str,
    notes: &str,
    rng: &mut R,
) -> GeneratedMaterials {
    let segments = segment(notes);
    log::debug!(
        "Segmented notes for '{}': {} sentences, {} keywords",
        topic_name,
        segments.sentences.len(),
        segments.keywords.len()
    );

    GeneratedMaterials {
        flashcards: generate_flashcards(&segments, topic_name),
        quiz_questions: generate_quiz(&segments.sentences, topic_name, rng),
        study_tips: generate_study_tips(topic_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_photosynthesis_materials() {
        let mut rng = StdRng::seed_from_u64(3);
        let materials = generate_materials(
            "Photosynthesis",
            "Photosynthesis converts light energy into chemical energy. Plants use chlorophyll to capture sunlight.",
            &mut rng,
        );

        assert_eq!(materials.flashcards.len(), 4);
        assert_eq!(materials.quiz_questions.len(), 2);
        assert!(materials.quiz_questions.iter().all(|q| !q.is_mcq()));
        assert_eq!(materials.study_tips.len(), 5);
    }

    #[test]
    fn test_only_short_fragments() {
        let mut rng = StdRng::seed_from_u64(3);
        let materials = generate_materials("cells", "tiny bit. another bit! ok?", &mut rng);

        assert!(materials.flashcards.is_empty());
        assert!(materials.quiz_questions.is_empty());
        assert_eq!(materials.study_tips.len(), 5);
    }

    #[test]
    fn test_limits_hold_for_long_notes() {
        let notes: String = (0..40)
            .map(|i| format!("Item {} Covers Several Important Terms about the subject matter. ", i))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let materials = generate_materials("Subject", &notes, &mut rng);

        assert_eq!(materials.flashcards.len(), 10);
        assert_eq!(materials.quiz_questions.len(), 5);
        assert_eq!(materials.study_tips.len(), 5);
    }
}
