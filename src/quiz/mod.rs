//! The quiz engine: tokenizing text, checking guesses and tracking progress.
//!
//! Nothing here touches the terminal. The front end owns a [`Session`] and
//! drives it through [`Session::submit_answer`].

mod error;
mod session;
pub mod tokenize;

pub use error::QuizError;
pub use session::{start_quiz, start_quiz_with, Session};
pub use tokenize::tokenize;

pub use crate::utils::strings::{normalize_word, word_hint};

/// Words shown at the start without being asked.
pub const PREFILLED_WORDS: usize = 3;

/// Shortest text a quiz can start from.
pub const MIN_WORDS: usize = PREFILLED_WORDS + 1;
