//! Game lifecycle

use super::GuessError;
use crate::challenge::{self, ChallengeError};
use crate::config::GameConfig;
use crate::core::{DEFAULT_LENGTH, Difficulty, Feedback, KeyboardState, Word, clue, limit_length};
use crate::daily::{DateSource, RandomStream, SelectError, select_target, todays_seed};
use crate::rules;
use crate::wordlists::{Dictionary, TargetPool};
use tracing::{debug, info, warn};

/// Hint shown before the first guess
pub const FIRST_GUESS_HINT: &str = "Make your first guess!";

/// Play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// How the target was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Drawn from the stream derived from `seed`
    Daily { seed: u32, game_number: u32 },
    /// Drawn from fresh entropy
    Random,
    /// Fixed by a challenge token
    Challenge,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    pub state: GameState,
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    mode: GameMode,
    difficulty: Difficulty,
    max_guesses: usize,
    history: Vec<Word>,
    /// Feedback for each entry of `history`, same order
    feedback: Vec<Feedback>,
    keyboard: KeyboardState,
    state: GameState,
    rng: RandomStream,
}

impl Game {
    /// Start the daily game for `config.seed`, or for today when no seed is set
    ///
    /// The target is the `game_number`-th draw from the seeded stream. When no target
    /// has the requested length the game falls back to the default length.
    ///
    /// # Errors
    /// Returns [`SelectError`] when even the default length has no eligible target.
    pub fn daily(
        config: &GameConfig,
        pool: &TargetPool,
        dates: &dyn DateSource,
    ) -> Result<Self, SelectError> {
        let seed = config.seed.unwrap_or_else(|| todays_seed(dates));
        let mut rng = RandomStream::derive(seed);
        let target = draw(pool, config.length, config.game_number, &mut rng)?;
        let mode = GameMode::Daily {
            seed,
            game_number: config.game_number,
        };
        Ok(Self::with_target(config, target, mode, rng))
    }

    /// Start a game whose target no other player shares
    ///
    /// # Errors
    /// Returns [`SelectError`] when no eligible target exists.
    pub fn random(config: &GameConfig, pool: &TargetPool) -> Result<Self, SelectError> {
        let mut rng = RandomStream::entropy();
        let target = draw(pool, config.length, 1, &mut rng)?;
        Ok(Self::with_target(config, target, GameMode::Random, rng))
    }

    /// Start a game on a target fixed by a challenge
    ///
    /// The word length follows the challenge word, not the configuration.
    #[must_use]
    pub fn challenge(config: &GameConfig, target: Word) -> Self {
        Self::with_target(config, target, GameMode::Challenge, RandomStream::entropy())
    }

    /// Start whichever game the configuration and optional challenge token ask for
    ///
    /// A bad token does not stop the game from starting: the error is handed back
    /// alongside a daily (or random) game.
    ///
    /// # Errors
    /// Returns [`SelectError`] when a non-challenge game has no eligible target.
    pub fn start(
        config: &GameConfig,
        pool: &TargetPool,
        dictionary: &Dictionary,
        dates: &dyn DateSource,
        token: Option<&str>,
    ) -> Result<(Self, Option<ChallengeError>), SelectError> {
        let rejected = match challenge::from_token(token, dictionary) {
            Ok(Some(target)) => return Ok((Self::challenge(config, target), None)),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "ignoring challenge token");
                Some(err)
            }
        };

        let game = if config.random {
            Self::random(config, pool)?
        } else {
            Self::daily(config, pool, dates)?
        };
        Ok((game, rejected))
    }

    fn with_target(config: &GameConfig, target: Word, mode: GameMode, rng: RandomStream) -> Self {
        debug!(?mode, length = target.len(), "game started");
        Self {
            target,
            mode,
            difficulty: config.difficulty,
            max_guesses: config.max_guesses,
            history: Vec::new(),
            feedback: Vec::new(),
            keyboard: KeyboardState::new(),
            state: GameState::Playing,
            rng,
        }
    }

    /// Submit a guess
    ///
    /// Checks run in order: length, dictionary membership, then consistency with
    /// earlier feedback under the game's difficulty. A rejected guess leaves the
    /// game untouched.
    ///
    /// # Errors
    /// Returns [`GuessError`] describing the first failed check.
    ///
    /// # Examples
    /// ```
    /// use todays_wordle::config::GameConfig;
    /// use todays_wordle::core::Word;
    /// use todays_wordle::game::{Game, GameState};
    /// use todays_wordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["dark", "dart"]);
    /// let mut game = Game::challenge(&GameConfig::default(), Word::new("dart").unwrap());
    ///
    /// assert_eq!(game.submit("dar", &dictionary).unwrap_err().to_string(), "Too short");
    /// assert_eq!(game.submit("dark", &dictionary).unwrap().state, GameState::Playing);
    /// assert_eq!(game.submit("dart", &dictionary).unwrap().state, GameState::Won);
    /// ```
    pub fn submit(&mut self, input: &str, dictionary: &Dictionary) -> Result<Turn, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }

        let input = input.trim();
        let expected = self.length();
        let got = input.chars().count();
        if got != expected {
            return Err(GuessError::WrongLength { expected, got });
        }

        let guess = Word::new(input).map_err(|_| GuessError::NotInDictionary)?;
        if !dictionary.contains(&guess) {
            return Err(GuessError::NotInDictionary);
        }

        rules::check(self.difficulty, &self.history, &self.target, &guess)?;

        let feedback = clue(&guess, &self.target);
        self.keyboard.record(&feedback);
        self.history.push(guess);
        self.feedback.push(feedback.clone());

        self.state = if feedback.is_perfect() {
            GameState::Won
        } else if self.history.len() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::Playing
        };

        debug!(guess = self.history.len(), state = ?self.state, "guess accepted");
        Ok(Turn {
            feedback,
            state: self.state,
        })
    }

    /// Begin the next game
    ///
    /// A daily game replays the same target, a random game draws a new one from its
    /// own stream, and a challenge hands over to today's daily game.
    ///
    /// # Errors
    /// Returns [`SelectError`] when a new target is needed and none is eligible.
    pub fn next_game(&mut self, pool: &TargetPool, dates: &dyn DateSource) -> Result<(), SelectError> {
        match self.mode {
            GameMode::Daily { .. } => {}
            GameMode::Random => {
                self.target = draw(pool, self.length(), 1, &mut self.rng)?;
            }
            GameMode::Challenge => {
                let seed = todays_seed(dates);
                let mut rng = RandomStream::derive(seed);
                self.target = draw(pool, self.length(), 1, &mut rng)?;
                self.rng = rng;
                self.mode = GameMode::Daily {
                    seed,
                    game_number: 1,
                };
                info!(seed, "challenge finished, back to the daily game");
            }
        }

        self.history.clear();
        self.feedback.clear();
        self.keyboard.clear();
        self.state = GameState::Playing;
        Ok(())
    }

    /// Hint announcing the result, once the game is over
    #[must_use]
    pub fn game_over_message(&self) -> Option<String> {
        let verbed = match self.state {
            GameState::Playing => return None,
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        let next = if self.mode == GameMode::Challenge {
            "play today's wordle"
        } else {
            "play again"
        };
        Some(format!(
            "You {verbed}! The answer was {}. (Enter to {next})",
            self.target.text().to_ascii_uppercase()
        ))
    }

    /// The hidden word
    ///
    /// Exposed for the game-over screen and tests; the consistency rules only
    /// ever see it through feedback.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Accepted guesses, in submission order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Feedback for each accepted guess
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Letters per word
    #[must_use]
    pub fn length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn is_challenge(&self) -> bool {
        self.mode == GameMode::Challenge
    }
}

/// Draw `count` targets and keep the last, falling back to the default length
fn draw(
    pool: &TargetPool,
    length: usize,
    count: u32,
    rng: &mut RandomStream,
) -> Result<Word, SelectError> {
    let length = limit_length(length);
    let first = match select_target(pool, length, rng) {
        Err(SelectError::EmptyPool { .. }) if length != DEFAULT_LENGTH => {
            warn!(length, fallback = DEFAULT_LENGTH, "no eligible targets, using the default length");
            return draw(pool, DEFAULT_LENGTH, count, rng);
        }
        result => result?,
    };

    let mut target = first;
    for _ in 1..count {
        target = select_target(pool, length, rng)?;
    }
    debug!(draws = count, seeded = rng.is_seeded(), "target drawn");
    Ok(target)
}
