use log::{debug, info};

use crate::models::{QuizMode, QuizSummary, SentenceSplit, WordStatus};
use crate::utils::strings;

use super::error::QuizError;
use super::tokenize::tokenize;
use super::PREFILLED_WORDS;

/// One run of the quiz over a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    raw_text: String,
    words: Vec<String>,
    sentences: Vec<Vec<String>>,
    split: SentenceSplit,
    current_index: usize,
    answers: Vec<Option<bool>>,
    user_input: String,
    quiz_mode: QuizMode,
}

/// Starts a quiz with the default sentence split.
///
/// # Errors
///
/// Returns `QuizError::TooShort` if the text has fewer than four words.
pub fn start_quiz(raw_text: &str) -> Result<Session, QuizError> {
    start_quiz_with(raw_text, SentenceSplit::default())
}

/// # Errors
///
/// Returns `QuizError::TooShort` if the text has fewer than four words.
pub fn start_quiz_with(raw_text: &str, split: SentenceSplit) -> Result<Session, QuizError> {
    let (words, sentences) = tokenize(raw_text, split)?;
    info!(
        "quiz started: {} words, {} sentences ({:?} split)",
        words.len(),
        sentences.len(),
        split
    );

    Ok(Session {
        raw_text: raw_text.to_string(),
        answers: vec![None; words.len()],
        words,
        sentences,
        split,
        current_index: PREFILLED_WORDS,
        user_input: String::new(),
        quiz_mode: QuizMode::default(),
    })
}

impl Session {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    pub fn split(&self) -> SentenceSplit {
        self.split
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[Option<bool>] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<bool> {
        self.answers.get(index).copied().flatten()
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn quiz_mode(&self) -> QuizMode {
        self.quiz_mode
    }

    pub fn set_mode(&mut self, mode: QuizMode) {
        self.quiz_mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.quiz_mode = self.quiz_mode.toggled();
    }

    /// A fresh session over the same text, keeping split policy and mode.
    pub fn restarted(&self) -> Session {
        let len = self.words.len();
        Session {
            current_index: PREFILLED_WORDS,
            answers: vec![None; len],
            user_input: String::new(),
            ..self.clone()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.words.len()
    }

    pub fn set_input(&mut self, input: &str) {
        self.user_input = input.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_complete() {
            self.user_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_complete() {
            self.user_input.pop();
        }
    }

    /// Whether a guess may be sent: the quiz is running and the input holds
    /// something besides whitespace.
    pub fn can_submit(&self) -> bool {
        !self.is_complete() && !self.user_input.trim().is_empty()
    }

    /// Checks `input` against the current word and moves on to the next one.
    ///
    /// Returns whether the guess was right, or `None` when the quiz is
    /// already over. The pending input is cleared afterwards unless this
    /// answer finished the quiz, in which case it is left as it was.
    pub fn submit_answer(&mut self, input: &str) -> Option<bool> {
        let target = self.words.get(self.current_index)?;
        let is_correct = strings::normalize_word(input) == strings::normalize_word(target);
        debug!(
            "word {} answered {:?} (target {:?}): {}",
            self.current_index,
            input,
            target,
            if is_correct { "correct" } else { "incorrect" }
        );

        self.answers[self.current_index] = Some(is_correct);
        self.current_index += 1;

        if self.is_complete() {
            info!("quiz complete: {:?}", self.summary());
        } else {
            self.user_input.clear();
        }
        Some(is_correct)
    }

    /// Submits the session's own pending input.
    pub fn submit(&mut self) -> Option<bool> {
        let input = self.user_input.clone();
        self.submit_answer(&input)
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_index).map(String::as_str)
    }

    pub fn current_hint(&self) -> Option<String> {
        self.current_word().map(strings::word_hint)
    }

    /// Index of the sentence holding the current word.
    ///
    /// Once the cursor runs past every sentence this is the last sentence.
    pub fn current_sentence_index(&self) -> usize {
        let mut word_count = 0;
        for (i, sentence) in self.sentences.iter().enumerate() {
            word_count += sentence.len();
            if word_count > self.current_index {
                return i;
            }
        }
        self.sentences.len().saturating_sub(1)
    }

    /// Global word index of the first word of sentence `index`.
    pub fn sentence_start_index(&self, index: usize) -> usize {
        self.sentences.iter().take(index).map(Vec::len).sum()
    }

    /// Sentences up to and including the current one, each paired with its
    /// start index.
    pub fn visible_sentences(&self) -> Vec<(usize, &[String])> {
        let last = self.current_sentence_index();
        let mut start = 0;
        let mut visible = Vec::with_capacity(last + 1);
        for sentence in self.sentences.iter().take(last + 1) {
            visible.push((start, sentence.as_slice()));
            start += sentence.len();
        }
        visible
    }

    /// Whether the input field belongs at the end of sentence `index`.
    pub fn shows_input_in(&self, index: usize) -> bool {
        let Some(sentence) = self.sentences.get(index) else {
            return false;
        };
        index == self.current_sentence_index()
            && self.sentence_start_index(index) + sentence.len() > self.current_index
            && !self.is_complete()
    }

    pub fn word_status(&self, index: usize) -> WordStatus {
        if index < PREFILLED_WORDS {
            WordStatus::Initial
        } else if index < self.current_index {
            match self.answer(index) {
                Some(true) => WordStatus::Correct,
                _ => WordStatus::Incorrect,
            }
        } else if index == self.current_index && !self.is_complete() {
            WordStatus::Current
        } else {
            WordStatus::Hidden
        }
    }

    pub fn summary(&self) -> QuizSummary {
        let attempted = self.answers.iter().filter(|a| a.is_some()).count();
        let correct = self.answers.iter().filter(|a| **a == Some(true)).count();
        let accuracy = if attempted > 0 {
            (correct as f64 / attempted as f64) * 100.0
        } else {
            0.0
        };

        QuizSummary {
            total_words: self.words.len(),
            attempted,
            correct,
            incorrect: attempted - correct,
            accuracy,
            completed: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    fn answer_all(session: &mut Session, guesses: &[&str]) {
        for g in guesses {
            session.submit_answer(g);
        }
    }

    #[test]
    fn start_initializes_state() {
        let session = start_quiz(FOX).unwrap();
        assert_eq!(session.words().len(), 9);
        assert_eq!(session.words()[8], "dog.");
        assert_eq!(session.current_index(), 3);
        assert_eq!(session.current_word(), Some("fox"));
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.answers().len(), 9);
        assert_eq!(session.user_input(), "");
        assert_eq!(session.quiz_mode(), QuizMode::Default);
        assert_eq!(session.raw_text(), FOX);
    }

    #[test]
    fn start_rejects_short_text() {
        assert_eq!(
            start_quiz("too short here").unwrap_err(),
            QuizError::TooShort { found: 3 }
        );
        assert!(start_quiz("just four words here").is_ok());
    }

    #[test]
    fn correct_answer_ignores_case_and_trailing_mark() {
        let mut session = start_quiz(FOX).unwrap();
        assert_eq!(session.submit_answer("Fox"), Some(true));
        assert_eq!(session.answer(3), Some(true));
        assert_eq!(session.current_index(), 4);

        assert_eq!(session.submit_answer(" JUMPS! "), Some(true));
        assert_eq!(session.submit_answer("under"), Some(false));
        assert_eq!(session.answer(5), Some(false));
    }

    #[test]
    fn empty_input_is_just_incorrect() {
        let mut session = start_quiz(FOX).unwrap();
        assert!(!session.can_submit());
        assert_eq!(session.submit(), Some(false));
        assert_eq!(session.current_index(), 4);
    }

    #[test]
    fn input_cleared_until_the_last_answer() {
        let mut session = start_quiz("one two three four five").unwrap();
        session.set_input("four");
        assert!(session.can_submit());
        assert_eq!(session.submit(), Some(true));
        assert_eq!(session.user_input(), "");

        session.set_input("six");
        assert_eq!(session.submit(), Some(false));
        assert!(session.is_complete());
        // the final guess stays visible
        assert_eq!(session.user_input(), "six");
        assert!(!session.can_submit());
    }

    #[test]
    fn final_answer_leaves_pending_input_alone() {
        let mut session = start_quiz("a b c d").unwrap();
        session.set_input("typed");
        assert_eq!(session.submit_answer("other"), Some(false));
        assert!(session.is_complete());
        assert_eq!(session.user_input(), "typed");
    }

    #[test]
    fn earlier_answers_clear_pending_input() {
        let mut session = start_quiz("a b c d e").unwrap();
        session.set_input("typed");
        assert_eq!(session.submit_answer("d"), Some(true));
        assert_eq!(session.user_input(), "");
    }

    #[test]
    fn completes_after_remaining_words() {
        let mut session = start_quiz(FOX).unwrap();
        for _ in 0..(session.words().len() - PREFILLED_WORDS) {
            assert!(!session.is_complete());
            session.submit_answer("x");
        }
        assert!(session.is_complete());
        assert_eq!(session.current_index(), session.words().len());
        assert_eq!(session.submit_answer("again"), None);
        assert_eq!(session.current_index(), 9);
    }

    #[test]
    fn leading_words_are_never_answered() {
        let mut session = start_quiz(FOX).unwrap();
        answer_all(&mut session, &["fox", "jumps", "over", "the", "lazy", "dog"]);
        assert!(session.answers()[..3].iter().all(Option::is_none));
        assert!(session.answers()[3..].iter().all(|a| *a == Some(true)));
    }

    #[test]
    fn editing_input_stops_after_completion() {
        let mut session = start_quiz("a b c d").unwrap();
        session.push_char('d');
        session.push_char('x');
        session.pop_char();
        assert_eq!(session.user_input(), "d");
        session.submit();
        session.push_char('z');
        assert_eq!(session.user_input(), "d");
    }

    #[test]
    fn current_sentence_tracks_progress() {
        let mut session = start_quiz("Hi there. How are you? I am fine.").unwrap();
        // words: Hi there. | How are you? | I am fine.
        assert_eq!(session.current_sentence_index(), 1);
        answer_all(&mut session, &["are", "you"]);
        assert_eq!(session.current_index(), 5);
        assert_eq!(session.current_sentence_index(), 2);
        answer_all(&mut session, &["i", "am", "fine"]);
        assert!(session.is_complete());
        assert_eq!(session.current_sentence_index(), 2);
    }

    #[test]
    fn strict_split_past_dropped_tail_falls_back_to_last_sentence() {
        let mut session =
            start_quiz_with("One two three. four five six", SentenceSplit::Strict).unwrap();
        assert_eq!(session.sentences().len(), 1);
        assert_eq!(session.current_sentence_index(), 0);
        session.submit_answer("four");
        assert_eq!(session.current_sentence_index(), 0);
        assert!(!session.shows_input_in(0));
    }

    #[test]
    fn visible_sentences_and_offsets() {
        let session = start_quiz("Hi there. How are you? I am fine.").unwrap();
        let visible = session.visible_sentences();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0, 0);
        assert_eq!(visible[1].0, 2);
        assert_eq!(visible[1].1, ["How", "are", "you?"]);
        assert_eq!(session.sentence_start_index(2), 5);
        assert!(session.shows_input_in(1));
        assert!(!session.shows_input_in(0));
        assert!(!session.shows_input_in(7));
    }

    #[test]
    fn word_statuses() {
        let mut session = start_quiz(FOX).unwrap();
        answer_all(&mut session, &["fox", "walks"]);
        assert_eq!(session.word_status(0), WordStatus::Initial);
        assert_eq!(session.word_status(3), WordStatus::Correct);
        assert_eq!(session.word_status(4), WordStatus::Incorrect);
        assert_eq!(session.word_status(5), WordStatus::Current);
        assert_eq!(session.word_status(6), WordStatus::Hidden);
    }

    #[test]
    fn hint_for_current_word() {
        let mut session = start_quiz(FOX).unwrap();
        assert_eq!(session.current_hint().as_deref(), Some("f__"));
        answer_all(&mut session, &["fox", "jumps", "over", "the", "lazy"]);
        assert_eq!(session.current_hint().as_deref(), Some("d__"));
        session.submit_answer("dog");
        assert_eq!(session.current_hint(), None);
    }

    #[test]
    fn summary_counts_answers() {
        let mut session = start_quiz("a b c d e f g").unwrap();
        let empty = session.summary();
        assert_eq!(empty.attempted, 0);
        assert_eq!(empty.accuracy, 0.0);

        answer_all(&mut session, &["d", "x", "f", "g"]);
        let summary = session.summary();
        assert_eq!(summary.total_words, 7);
        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.accuracy, 75.0);
        assert!(summary.completed);
    }

    #[test]
    fn mode_does_not_affect_answers() {
        let mut session = start_quiz(FOX).unwrap();
        session.toggle_mode();
        assert_eq!(session.quiz_mode(), QuizMode::ShowFullText);
        assert_eq!(session.submit_answer("fox"), Some(true));
        session.set_mode(QuizMode::Default);
        assert_eq!(session.submit_answer("jumps"), Some(true));
    }

    #[test]
    fn restart_keeps_text_and_settings() {
        let mut session = start_quiz_with(FOX, SentenceSplit::Strict).unwrap();
        session.toggle_mode();
        answer_all(&mut session, &["fox", "x"]);
        let fresh = session.restarted();
        assert_eq!(fresh.current_index(), 3);
        assert!(fresh.answers().iter().all(Option::is_none));
        assert_eq!(fresh.split(), SentenceSplit::Strict);
        assert_eq!(fresh.quiz_mode(), QuizMode::ShowFullText);
        assert_eq!(fresh.words(), session.words());
    }
}
