//! Quiz synthesis: open questions and multiple-choice questions built from
//! a rotating set of templates.

use crate::models::QuizQuestion;
use rand::Rng;
use rand::seq::SliceRandom;

pub const MAX_QUESTIONS: usize = 5;
/// Length (in characters) of the sentence prefix used as the correct option.
pub const OPTION_PREFIX_CHARS: usize = 50;
/// Words must be longer than this to serve as a question's key term.
pub const KEY_TERM_MIN_CHARS: usize = 5;

pub const DISTRACTORS: [&str; 3] = [
    "This is an incorrect option",
    "Another incorrect option",
    "Yet another incorrect option",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Open,
    Mcq,
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub prefix: &'static str,
    pub kind: TemplateKind,
}

/// Question `i` uses `TEMPLATES[i % TEMPLATES.len()]`.
pub const TEMPLATES: [Template; 4] = [
    Template {
        prefix: "What is the main idea of",
        kind: TemplateKind::Open,
    },
    Template {
        prefix: "Explain the concept of",
        kind: TemplateKind::Open,
    },
    Template {
        prefix: "Which statement is true about",
        kind: TemplateKind::Mcq,
    },
    Template {
        prefix: "What is the relationship between",
        kind: TemplateKind::Open,
    },
];

pub fn generate_quiz<R: Rng + ?Sized>(
    sentences: &[String],
    topic_name: &str,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    sentences
        .iter()
        .take(MAX_QUESTIONS)
        .enumerate()
        .map(|(i, sentence)| {
            let template = TEMPLATES[i % TEMPLATES.len()];
            let question = format!("{} {}?", template.prefix, key_term(sentence, topic_name));

            match template.kind {
                TemplateKind::Open => QuizQuestion::Open {
                    question,
                    answer: sentence.clone(),
                },
                TemplateKind::Mcq => {
                    let (options, correct_answer) = shuffled_options(sentence, &mut *rng);
                    QuizQuestion::Mcq {
                        question,
                        options,
                        correct_answer,
                    }
                }
            }
        })
        .collect()
}

/// First word longer than [`KEY_TERM_MIN_CHARS`], falling back to the topic name.
fn key_term<'a>(sentence: &'a str, topic_name: &'a str) -> &'a str {
    sentence
        .split_whitespace()
        .find(|word| word.chars().count() > KEY_TERM_MIN_CHARS)
        .unwrap_or(topic_name)
}

/// Returns the four options in random order and the position of the correct one.
fn shuffled_options<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> (Vec<String>, usize) {
    let correct: String = sentence.chars().take(OPTION_PREFIX_CHARS).collect();
    let mut candidates = vec![format!("{}...", correct)];
    candidates.extend(DISTRACTORS.iter().map(|s| s.to_string()));

    // Index 0 of `order` starts out as the correct option.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.shuffle(rng);

    let correct_answer = order.iter().position(|&i| i == 0).unwrap_or(0);
    let options = order.into_iter().map(|i| candidates[i].clone()).collect();
    (options, correct_answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sentences(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("Sentence {} describes mitochondria and their energetic role in cells", i))
            .collect()
    }

    #[test]
    fn test_two_sentences_are_open() {
        let mut rng = StdRng::seed_from_u64(7);
        let sentences = vec![
            "Photosynthesis converts light energy into chemical energy".to_string(),
            "Plants use chlorophyll to capture sunlight".to_string(),
        ];
        let quiz = generate_quiz(&sentences, "Photosynthesis", &mut rng);

        assert_eq!(quiz.len(), 2);
        assert_eq!(
            quiz[0],
            QuizQuestion::Open {
                question: "What is the main idea of Photosynthesis?".to_string(),
                answer: sentences[0].clone(),
            }
        );
        assert_eq!(quiz[1].question(), "Explain the concept of Plants?");
    }

    #[test]
    fn test_template_cycle_and_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = generate_quiz(&sentences(8), "Biology", &mut rng);

        assert_eq!(quiz.len(), MAX_QUESTIONS);
        let kinds: Vec<bool> = quiz.iter().map(QuizQuestion::is_mcq).collect();
        assert_eq!(kinds, vec![false, false, true, false, false]);
        assert!(quiz[3].question().starts_with("What is the relationship between"));
        assert!(quiz[4].question().starts_with("What is the main idea of"));
    }

    #[test]
    fn test_key_term_falls_back_to_topic() {
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = generate_quiz(&["a bb ccc dddd eeeee ff gg hh".to_string()], "Biology", &mut rng);
        assert_eq!(quiz[0].question(), "What is the main idea of Biology?");
    }

    #[test]
    fn test_mcq_correct_option_tracked() {
        let sentences = sentences(3);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quiz = generate_quiz(&sentences, "Biology", &mut rng);

            let QuizQuestion::Mcq {
                options,
                correct_answer,
                ..
            } = &quiz[2]
            else {
                panic!("third question should be multiple choice");
            };

            assert_eq!(options.len(), 4);
            let expected: String = sentences[2].chars().take(OPTION_PREFIX_CHARS).collect();
            let matching: Vec<usize> = options
                .iter()
                .enumerate()
                .filter(|(_, o)| **o == format!("{}...", expected))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(matching, vec![*correct_answer]);
            for distractor in DISTRACTORS {
                assert!(options.iter().any(|o| o == distractor));
            }
        }
    }

    #[test]
    fn test_same_seed_same_quiz() {
        let sentences = sentences(5);
        let a = generate_quiz(&sentences, "Biology", &mut StdRng::seed_from_u64(99));
        let b = generate_quiz(&sentences, "Biology", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        let mut seen = [false; 4];
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let (_, correct) = shuffled_options("A sentence long enough to be used", &mut rng);
            seen[correct] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
