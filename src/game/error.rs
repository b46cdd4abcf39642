//! Reasons a submitted guess is turned away

use crate::rules::Violation;
use thiserror::Error;

/// Why a guess was not accepted
///
/// The `Display` text doubles as the hint shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("{}", length_hint(.got, .expected))]
    WrongLength { expected: usize, got: usize },
    #[error("Not a valid word")]
    NotInDictionary,
    #[error(transparent)]
    Violation(#[from] Violation),
    #[error("The game is over")]
    GameOver,
}

fn length_hint(got: &usize, expected: &usize) -> &'static str {
    if got < expected { "Too short" } else { "Too long" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_read_like_the_game() {
        let short = GuessError::WrongLength { expected: 5, got: 3 };
        let long = GuessError::WrongLength { expected: 4, got: 6 };
        assert_eq!(short.to_string(), "Too short");
        assert_eq!(long.to_string(), "Too long");
        assert_eq!(GuessError::NotInDictionary.to_string(), "Not a valid word");
    }

    #[test]
    fn violations_pass_their_reason_through() {
        let err = GuessError::from(Violation::MustNotContain { letter: b's' });
        assert_eq!(err.to_string(), "Guess can't contain S");
    }
}
