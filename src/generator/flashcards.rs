//! Flashcard synthesis from segmented notes.

use super::segmenter::Segments;
use crate::models::Flashcard;

pub const MAX_SENTENCE_CARDS: usize = 8;
pub const MAX_KEYWORD_CARDS: usize = 4;
pub const MAX_FLASHCARDS: usize = 10;
/// Sentences with fewer words are too short to split into question and answer.
pub const MIN_WORDS: usize = 6;

/// Builds sentence cards (in sentence order) followed by keyword cards,
/// capped at [`MAX_FLASHCARDS`].
pub fn generate_flashcards(segments: &Segments, topic_name: &str) -> Vec<Flashcard> {
    let sentence_cards = segments
        .sentences
        .iter()
        .take(MAX_SENTENCE_CARDS)
        .filter_map(|sentence| sentence_card(sentence, topic_name));

    let keyword_cards = segments
        .keywords
        .iter()
        .take(MAX_KEYWORD_CARDS)
        .map(|keyword| keyword_card(keyword, topic_name));

    sentence_cards
        .chain(keyword_cards)
        .take(MAX_FLASHCARDS)
        .collect()
}

/// Splits the sentence at the (rounded up) middle word: the first half is
/// the prompt, the rest is the answer.
fn sentence_card(sentence: &str, topic_name: &str) -> Option<Flashcard> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_WORDS {
        return None;
    }

    let split_at = words.len().div_ceil(2);
    let stem = words[..split_at].join(" ");
    let answer = words[split_at..].join(" ");

    Some(Flashcard::new(
        format!("What follows: \"{}...\"?", stem),
        answer,
        topic_name,
    ))
}

fn keyword_card(keyword: &str, topic_name: &str) -> Flashcard {
    Flashcard::new(
        format!("Define or explain: {}", keyword),
        format!(
            "Key concept from {} - Review your notes for details about {}.",
            topic_name, keyword
        ),
        topic_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::segmenter::segment;

    #[test]
    fn test_photosynthesis_cards() {
        let segments = segment(
            "Photosynthesis converts light energy into chemical energy. Plants use chlorophyll to capture sunlight.",
        );
        let cards = generate_flashcards(&segments, "Photosynthesis");

        assert_eq!(cards.len(), 4);
        assert_eq!(
            cards[0].question,
            "What follows: \"Photosynthesis converts light energy...\"?"
        );
        assert_eq!(cards[0].answer, "into chemical energy");
        assert_eq!(cards[1].question, "What follows: \"Plants use chlorophyll...\"?");
        assert_eq!(cards[1].answer, "to capture sunlight");
        assert_eq!(cards[2].question, "Define or explain: Photosynthesis");
        assert_eq!(
            cards[3].answer,
            "Key concept from Photosynthesis - Review your notes for details about Plants."
        );
        assert!(cards.iter().all(|c| c.topic_name == "Photosynthesis"));
    }

    #[test]
    fn test_short_sentences_skipped() {
        let segments = Segments {
            sentences: vec!["five words are not enough".to_string()],
            keywords: Vec::new(),
        };
        assert!(generate_flashcards(&segments, "t").is_empty());
    }

    #[test]
    fn test_truncated_to_ten_from_tail() {
        let segments = Segments {
            sentences: (0..12)
                .map(|i| format!("sentence number {} has enough words here", i))
                .collect(),
            keywords: vec!["Alpha".to_string(), "Beta".to_string()],
        };
        let cards = generate_flashcards(&segments, "t");

        assert_eq!(cards.len(), MAX_FLASHCARDS);
        // Eight sentence cards, then the first two keyword cards.
        assert!(cards[7].question.contains("sentence number 7"));
        assert_eq!(cards[8].question, "Define or explain: Alpha");
        assert_eq!(cards[9].question, "Define or explain: Beta");
    }

    #[test]
    fn test_keyword_cards_capped_at_four() {
        let segments = Segments {
            sentences: Vec::new(),
            keywords: ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect(),
        };
        let cards = generate_flashcards(&segments, "t");
        assert_eq!(cards.len(), MAX_KEYWORD_CARDS);
        assert_eq!(cards[3].question, "Define or explain: D");
    }
}
