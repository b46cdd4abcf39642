//! Game configuration
//!
//! Settings are read once when a game starts; the engine never mutates them.

use crate::core::{DEFAULT_LENGTH, Difficulty, limit_length};
use crate::wordlists::DEFAULT_CUTOFF;

/// Title used in share text
pub const GAME_NAME: &str = "Today's Wordle";

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Highest game number selectable for a day
pub const MAX_GAME_NUMBER: u32 = 1000;

/// Settings for starting games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word, already clamped into the playable range
    pub length: usize,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
    /// Which draw from the day's stream to play, starting at 1
    pub game_number: u32,
    /// Play this seed instead of today's
    pub seed: Option<u32>,
    /// Draw from fresh entropy instead of the daily seed
    pub random: bool,
    /// Least common word eligible as a target
    pub cutoff: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            difficulty: Difficulty::Normal,
            max_guesses: MAX_GUESSES,
            game_number: 1,
            seed: None,
            random: false,
            cutoff: DEFAULT_CUTOFF.to_string(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word length; out-of-range values fall back to the default
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = limit_length(length);
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the guess budget; zero is treated as the default
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = if max_guesses == 0 { MAX_GUESSES } else { max_guesses };
        self
    }

    /// Set the game number; values outside `1..=1000` become 1
    #[must_use]
    pub fn with_game_number(mut self, game_number: u32) -> Self {
        self.game_number = limit_game_number(game_number);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn with_cutoff(mut self, cutoff: impl Into<String>) -> Self {
        self.cutoff = cutoff.into();
        self
    }
}

/// Clamp a game number into `1..=1000`, falling back to 1
#[must_use]
pub const fn limit_game_number(game_number: u32) -> u32 {
    if game_number >= 1 && game_number <= MAX_GAME_NUMBER {
        game_number
    } else {
        1
    }
}
