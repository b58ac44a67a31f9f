//! Splits raw notes into candidate sentences and capitalized keywords.

use regex::Regex;
use std::sync::LazyLock;

/// Fragments shorter than this (after trimming) are treated as noise.
pub const MIN_SENTENCE_CHARS: usize = 20;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));

/// One or more capitalized words joined by whitespace, e.g. "World War".
/// Word boundaries are ASCII-only, so "Café" yields "Caf".
static CAPITALIZED_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*(?-u:\b)").expect("Invalid keyword regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub sentences: Vec<String>,
    pub keywords: Vec<String>,
}

pub fn segment(notes: &str) -> Segments {
    Segments {
        sentences: split_sentences(notes),
        keywords: extract_keywords(notes),
    }
}

/// Trimmed fragments between runs of `.`, `!` or `?`, in original order.
pub fn split_sentences(notes: &str) -> Vec<String> {
    SENTENCE_END
        .split(notes)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Capitalized words and phrases found anywhere in the notes, in order of appearance.
pub fn extract_keywords(notes: &str) -> Vec<String> {
    CAPITALIZED_PHRASE
        .find_iter(notes)
        .map(|m| m.as_str().to_string())
        .collect()
}
