//! Keyboard letter state
//!
//! Tracks the best clue revealed so far for each letter across accepted guesses.

use super::{Clue, Feedback};

/// Best clue per letter `a..=z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    best: [Option<Clue>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an accepted guess's feedback into the state
    pub fn record(&mut self, feedback: &Feedback) {
        for clued in feedback.letters() {
            if let Some(slot) = Self::slot(clued.letter).map(|i| &mut self.best[i]) {
                *slot = Some(slot.map_or(clued.clue, |old| old.max(clued.clue)));
            }
        }
    }

    /// Best clue seen for `letter`, if it has been guessed
    #[must_use]
    pub fn best(&self, letter: u8) -> Option<Clue> {
        Self::slot(letter.to_ascii_lowercase()).and_then(|i| self.best[i])
    }

    pub fn clear(&mut self) {
        self.best = [None; 26];
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}
