//! Core domain types
//!
//! Words, per-letter feedback, difficulty levels and keyboard state.
//! Everything here is pure and deterministic.

mod clue;
mod difficulty;
mod keyboard;
mod word;

pub use clue::{Clue, CluedLetter, Feedback, clue};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use keyboard::KeyboardState;
pub use word::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, Word, WordError, limit_length};
