//! Today's Wordle
//!
//! A daily word-guessing puzzle: every player gets the same hidden word on the
//! same UTC date, guesses are clued letter by letter, and hard modes force each
//! guess to respect what earlier clues revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use todays_wordle::core::{Clue, Word, clue};
//!
//! let guess = Word::new("raid").unwrap();
//! let target = Word::new("dart").unwrap();
//!
//! let feedback = clue(&guess, &target);
//! assert_eq!(feedback.letters()[1].clue, Clue::Correct);
//! assert_eq!(feedback.describe(), "R elsewhere, A correct, I no, D elsewhere");
//! ```

// Core domain types
pub mod core;

// Consistency rules for hard modes
pub mod rules;

// Seeded streams and daily target selection
pub mod daily;

// Challenge link tokens
pub mod challenge;

// Word lists
pub mod wordlists;

// Game settings
pub mod config;

// Game lifecycle
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
