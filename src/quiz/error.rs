use thiserror::Error;

use super::MIN_WORDS;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("text is too short: found {found} word(s), need at least {}", MIN_WORDS)]
    TooShort { found: usize },
}
