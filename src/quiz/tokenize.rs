use regex::Regex;
use std::sync::LazyLock;

use crate::models::SentenceSplit;
use crate::utils::strings;

use super::error::QuizError;
use super::MIN_WORDS;

/// Words of the text, plus the same text grouped into sentences.
pub type Tokens = (Vec<String>, Vec<Vec<String>>);

/// Splits `text` into words and sentences.
///
/// # Errors
///
/// Returns `QuizError::TooShort` when the text has fewer than four words.
pub fn tokenize(text: &str, split: SentenceSplit) -> Result<Tokens, QuizError> {
    let words = strings::split_words(text);
    if words.len() < MIN_WORDS {
        return Err(QuizError::TooShort { found: words.len() });
    }

    let sentences = match split {
        SentenceSplit::Aligned => split_sentences_aligned(&words),
        SentenceSplit::Strict => split_sentences_strict(text),
    };
    Ok((words, sentences))
}

/// Groups words into sentences, closing one after every word that ends in
/// a terminator. Trailing words without a terminator still form a sentence.
pub fn split_sentences_aligned(words: &[String]) -> Vec<Vec<String>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for word in words {
        current.push(word.clone());
        if strings::ends_with_terminator(word) {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Greedy match of "non-terminators followed by terminators".
///
/// Terminators before the first sentence are skipped and text after the
/// last terminator is dropped. With no terminator at all the whole text is
/// one sentence.
pub fn split_sentences_strict(text: &str) -> Vec<Vec<String>> {
    let mut spans: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();
    if spans.is_empty() {
        spans.push(text);
    }
    spans.into_iter().map(strings::split_words).collect()
}
