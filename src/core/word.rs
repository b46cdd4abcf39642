//! Word representation
//!
//! A Word is a case-normalized run of ASCII letters whose length stays fixed for one game.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest playable word
pub const MIN_LENGTH: usize = 4;

/// Longest playable word
pub const MAX_LENGTH: usize = 11;

/// Length used when none (or an out-of-range one) is requested
pub const DEFAULT_LENGTH: usize = 5;

/// A lowercase word of 4 to 11 letters
///
/// Letters are indexed as bytes, which is safe because construction rejects non-ASCII input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be 4 to 11 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4..=11
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use todays_wordle::core::Word;
    ///
    /// let word = Word::new("DART").unwrap();
    /// assert_eq!(word.text(), "dart");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// How many times `letter` occurs
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars().iter().filter(|&&c| c == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the remaining-demand counters for feedback calculation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Clamp a requested word length into the playable range
///
/// Out-of-range requests fall back to [`DEFAULT_LENGTH`] rather than the nearest bound.
#[must_use]
pub const fn limit_length(length: usize) -> usize {
    if length >= MIN_LENGTH && length <= MAX_LENGTH {
        length
    } else {
        DEFAULT_LENGTH
    }
}
