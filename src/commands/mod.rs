//! Command implementations

pub mod calendar;
pub mod challenge;
pub mod check;
pub mod simple;
pub mod today;

pub use calendar::{CalendarEntry, CalendarReport, run_calendar};
pub use challenge::{ChallengeLink, challenge_options, create_challenge, decode_challenge};
pub use check::{CheckResult, run_check};
pub use simple::run_simple;
pub use today::{TodayResult, run_today};

use crate::challenge::ChallengeError;
use crate::core::WordError;
use crate::daily::SelectError;
use thiserror::Error;

/// Failure of a non-interactive command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("'{word}' is not a playable word: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),
    #[error("'{word}' has {got} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse user text into a word, naming the offending input on failure
pub(crate) fn parse_word(text: &str) -> Result<crate::core::Word, CommandError> {
    crate::core::Word::new(text.trim()).map_err(|source| CommandError::InvalidWord {
        word: text.trim().to_string(),
        source,
    })
}
