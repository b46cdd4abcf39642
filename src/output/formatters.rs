//! Formatting utilities for terminal output

use crate::config::GAME_NAME;
use crate::core::{Clue, Feedback};
use crate::daily::describe_seed;
use crate::game::{Game, GameMode, GameState};
use colored::{ColoredString, Colorize};

/// Emoji set for shared results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Standard,
    /// Blue and orange instead of yellow and green
    ColorBlind,
}

impl Palette {
    #[must_use]
    pub const fn new(color_blind: bool) -> Self {
        if color_blind {
            Self::ColorBlind
        } else {
            Self::Standard
        }
    }

    /// Square for one clue
    #[must_use]
    pub const fn tile(self, clue: Clue) -> char {
        match (self, clue) {
            (_, Clue::Absent) => '⬛',
            (Self::Standard, Clue::Elsewhere) => '🟨',
            (Self::Standard, Clue::Correct) => '🟩',
            (Self::ColorBlind, Clue::Elsewhere) => '🟦',
            (Self::ColorBlind, Clue::Correct) => '🟧',
        }
    }
}

/// Format feedback as a row of emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback, palette: Palette) -> String {
    feedback
        .letters()
        .iter()
        .map(|clued| palette.tile(clued.clue))
        .collect()
}

/// Shareable summary: a title line with the score, then one row per guess
///
/// # Examples
/// ```
/// use todays_wordle::config::GameConfig;
/// use todays_wordle::core::Word;
/// use todays_wordle::game::Game;
/// use todays_wordle::output::formatters::{Palette, share_text};
/// use todays_wordle::wordlists::Dictionary;
///
/// let dictionary = Dictionary::new(["dark", "dart"]);
/// let mut game = Game::challenge(&GameConfig::default(), Word::new("dart").unwrap());
/// game.submit("dark", &dictionary).unwrap();
/// game.submit("dart", &dictionary).unwrap();
///
/// assert_eq!(share_text(&game, Palette::Standard), "Today's Wordle 2/6\n🟩🟩🟩⬛\n🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(game: &Game, palette: Palette) -> String {
    let score = if game.state() == GameState::Lost {
        "X".to_string()
    } else {
        game.history().len().to_string()
    };

    let mut text = format!("{GAME_NAME} {score}/{}", game.max_guesses());
    for feedback in game.feedback() {
        text.push('\n');
        text.push_str(&feedback_to_emoji(feedback, palette));
    }
    text
}

/// One line saying which game is being played
#[must_use]
pub fn describe_game(game: &Game) -> String {
    match game.mode() {
        GameMode::Daily { seed, game_number } => format!(
            "{}, length {}, game {game_number}",
            describe_seed(seed),
            game.length()
        ),
        GameMode::Random => "playing a random game".to_string(),
        GameMode::Challenge => "playing a challenge game".to_string(),
    }
}

/// Uppercase letter on a colored background, for line-based output
#[must_use]
pub fn colored_tile(letter: u8, clue: Option<Clue>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase() as char);
    match clue {
        Some(Clue::Correct) => text.black().on_green().bold(),
        Some(Clue::Elsewhere) => text.black().on_yellow().bold(),
        Some(Clue::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A whole guess as colored tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|clued| colored_tile(clued.letter, Some(clued.clue)).to_string())
        .collect()
}
