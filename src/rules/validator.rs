//! Consistency checks for hard and ultra-hard play
//!
//! A candidate guess is compared against the knowledge revealed by earlier
//! guesses. Rules are checked in a fixed order and the first broken one is reported:
//!
//! 1. Hard: known letters stay in place
//! 2. Hard: revealed letters are reused, with multiplicity
//! 3. Ultra: misplaced letters move off the position where they were clued
//! 4. Ultra: letters with a known count appear exactly that often (zero for absent letters)

use super::knowledge::Knowledge;
use super::wording::{english_number, glyph, glyphs, ordinal};
use crate::core::{Difficulty, Word};
use std::fmt;

/// The first rule a candidate guess breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A green letter moved or disappeared
    MustBe { position: usize, letter: u8 },
    /// Too few copies of a revealed letter
    MustContain { letter: u8, count: usize },
    /// A letter returned to a position where it was already shown not to belong
    CannotBe { position: usize, letter: u8 },
    /// A letter known to be absent was used
    MustNotContain { letter: u8 },
    /// Too many copies of a letter whose count is known
    MustContainExactly { letter: u8, count: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MustBe { position, letter } => {
                write!(f, "{} letter must be {}", ordinal(position + 1), glyph(letter))
            }
            Self::MustContain { letter, count } => {
                let at_least = if count > 1 {
                    format!("at least {} ", english_number(count))
                } else {
                    String::new()
                };
                write!(f, "Guess must contain {at_least}{}", glyphs(letter, count))
            }
            Self::CannotBe { position, letter } => {
                write!(f, "{} letter can't be {}", ordinal(position + 1), glyph(letter))
            }
            Self::MustNotContain { letter } => write!(f, "Guess can't contain {}", glyph(letter)),
            Self::MustContainExactly { letter, count } => write!(
                f,
                "Guess must contain exactly {} {}",
                english_number(count),
                glyphs(letter, count)
            ),
        }
    }
}

impl std::error::Error for Violation {}

/// Decide whether `candidate` respects everything earlier guesses revealed
///
/// Feedback for each historical guess is recomputed against `target`.
///
/// # Errors
/// Returns the first [`Violation`] found, in rule order.
///
/// # Panics
/// Panics if the candidate or any historical guess differs in length from `target`.
///
/// # Examples
/// ```
/// use todays_wordle::core::{Difficulty, Word};
/// use todays_wordle::rules::check;
///
/// let target = Word::new("dart").unwrap();
/// let history = [Word::new("dark").unwrap()];
///
/// let rejected = check(Difficulty::Hard, &history, &target, &Word::new("wart").unwrap());
/// assert_eq!(rejected.unwrap_err().to_string(), "1st letter must be D");
/// assert!(check(Difficulty::Hard, &history, &target, &target).is_ok());
/// ```
pub fn check(
    difficulty: Difficulty,
    history: &[Word],
    target: &Word,
    candidate: &Word,
) -> Result<(), Violation> {
    assert_eq!(
        candidate.len(),
        target.len(),
        "candidate '{candidate}' must match the target length"
    );

    if !difficulty.is_hard() {
        return Ok(());
    }

    verify(difficulty, &Knowledge::from_history(history, target), candidate)
}

/// Check a candidate against already-gathered knowledge
///
/// Rules are checked by kind over the whole history, not guess by guess: every
/// fixed position first, then every minimum count, then (ultra only) every
/// misplaced letter, then every exact count. Within a kind, positions go left to
/// right and letters in the order they were first revealed.
///
/// # Errors
/// Returns the first [`Violation`] found, in rule order.
pub fn verify(
    difficulty: Difficulty,
    knowledge: &Knowledge,
    candidate: &Word,
) -> Result<(), Violation> {
    if !difficulty.is_hard() {
        return Ok(());
    }

    if let Some((position, letter)) = knowledge
        .fixed_letters()
        .find(|&(i, letter)| candidate.char_at(i) != letter)
    {
        return Err(Violation::MustBe { position, letter });
    }

    if let Some((letter, count)) = knowledge
        .required_letters()
        .find(|&(letter, count)| candidate.count_of(letter) < count)
    {
        return Err(Violation::MustContain { letter, count });
    }

    if !difficulty.is_ultra() {
        return Ok(());
    }

    if let Some((position, letter)) = knowledge
        .misplaced_letters()
        .find(|&(i, letter)| candidate.char_at(i) == letter)
    {
        return Err(Violation::CannotBe { position, letter });
    }

    if let Some((letter, count)) = knowledge
        .exact_letters()
        .find(|&(letter, count)| candidate.count_of(letter) != count)
    {
        return Err(if count == 0 {
            Violation::MustNotContain { letter }
        } else {
            Violation::MustContainExactly { letter, count }
        });
    }

    Ok(())
}
