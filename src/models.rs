use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    #[default]
    Default,
    #[serde(alias = "full-text", alias = "full_text")]
    #[value(name = "full-text", alias = "show-full-text")]
    ShowFullText,
}

impl QuizMode {
    pub const ALL: [QuizMode; 2] = [QuizMode::Default, QuizMode::ShowFullText];

    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Default => "Default",
            QuizMode::ShowFullText => "Show Full Text",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuizMode::Default => QuizMode::ShowFullText,
            QuizMode::ShowFullText => QuizMode::Default,
        }
    }
}

/// How raw text is cut into sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceSplit {
    /// Sentences are built from the word list, so flattening them gives the
    /// words back. Words after the last terminator form a final sentence.
    #[default]
    Aligned,
    /// Greedy "non-terminators then terminators" matching over the raw text.
    /// Text after the last terminator is dropped.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    /// One of the leading words that are shown without being asked.
    Initial,
    Correct,
    Incorrect,
    /// The word being guessed right now.
    Current,
    Hidden,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppState {
    Editing,
    Quiz,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSummary {
    pub total_words: usize,
    pub attempted: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Percentage of attempted words answered correctly.
    pub accuracy: f64,
    pub completed: bool,
}
