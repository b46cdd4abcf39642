//! TUI application state and logic

use crate::daily::DateSource;
use crate::game::{Game, GameState};
use crate::output::formatters::{Palette, share_text};
use crate::wordlists::{Dictionary, TargetPool};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game,
    pub dictionary: &'a Dictionary,
    pub pool: &'a TargetPool,
    pub dates: &'a dyn DateSource,
    pub palette: Palette,
    /// Letters typed for the row being entered
    pub current_guess: String,
    /// One-line status under the board
    pub hint: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games played this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, game: &Game) {
        self.total_games += 1;
        if game.state() == GameState::Won {
            self.games_won += 1;
            let guesses = game.history().len();
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        game: Game,
        dictionary: &'a Dictionary,
        pool: &'a TargetPool,
        dates: &'a dyn DateSource,
        palette: Palette,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            game,
            dictionary,
            pool,
            dates,
            palette,
            current_guess: String::new(),
            hint: hint.into(),
            messages: vec![Message {
                text: "Type a word and press Enter. Esc quits, Tab shares.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// React to one key press
    ///
    /// Each Enter runs a complete submission before the next key is looked at.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.share(),
            _ if self.game.state().is_over() => {
                if key.code == KeyCode::Enter {
                    self.new_game();
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.current_guess.len() < self.game.length() {
                    self.current_guess.push(c.to_ascii_lowercase());
                }
                self.hint.clear();
            }
            KeyCode::Backspace => {
                self.current_guess.pop();
                self.hint.clear();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Submit the typed row
    pub fn submit(&mut self) {
        let input = self.current_guess.clone();
        match self.game.submit(&input, self.dictionary) {
            Ok(turn) => {
                self.current_guess.clear();
                self.add_message(&turn.feedback.describe(), MessageStyle::Info);
                if let Some(message) = self.game.game_over_message() {
                    self.stats.record(&self.game);
                    let style = if turn.state == GameState::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&message, style);
                    self.hint = message;
                } else {
                    self.hint.clear();
                }
            }
            Err(err) => self.hint = err.to_string(),
        }
    }

    pub fn new_game(&mut self) {
        let was_challenge = self.game.is_challenge();
        match self.game.next_game(self.pool, self.dates) {
            Ok(()) => {
                self.current_guess.clear();
                self.hint = if was_challenge {
                    crate::game::FIRST_GUESS_HINT.to_string()
                } else {
                    String::new()
                };
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not start the next game");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Post the emoji summary to the message log
    pub fn share(&mut self) {
        if self.game.history().is_empty() {
            self.add_message("Nothing to share yet!", MessageStyle::Error);
            return;
        }
        let text = share_text(&self.game, self.palette);
        for line in text.lines() {
            self.add_message(line, MessageStyle::Success);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Room for a full share summary
        let keep = self.game.max_guesses() + 2;
        if self.messages.len() > keep {
            let excess = self.messages.len() - keep;
            self.messages.drain(..excess);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::daily::FixedDate;
    use chrono::NaiveDate;

    struct Fixture {
        dictionary: Dictionary,
        pool: TargetPool,
        dates: FixedDate,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dictionary: Dictionary::new(["dart", "dark", "raid", "bank", "card"]),
                pool: TargetPool::new(["dart", "dark", "raid", "bank", "card"]),
                dates: FixedDate(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()),
            }
        }

        fn app(&self) -> App<'_> {
            let game = Game::challenge(&GameConfig::default(), Word::new("dart").unwrap());
            App::new(game, &self.dictionary, &self.pool, &self.dates, Palette::Standard, "")
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let fixture = Fixture::new();
        let mut app = fixture.app();
        for c in "DARTS".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.current_guess, "dart");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.current_guess, "dar");
    }

    #[test]
    fn short_guess_sets_hint() {
        let fixture = Fixture::new();
        let mut app = fixture.app();
        type_word(&mut app, "dar");
        assert_eq!(app.hint, "Too short");
        assert_eq!(app.current_guess, "dar");
        assert!(app.game.history().is_empty());
    }

    #[test]
    fn win_then_enter_starts_daily_game() {
        let fixture = Fixture::new();
        let mut app = fixture.app();
        type_word(&mut app, "dark");
        type_word(&mut app, "dart");
        assert_eq!(app.game.state(), GameState::Won);
        assert!(app.hint.starts_with("You won!"));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('x'));
        assert!(app.current_guess.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.game.is_challenge());
        assert_eq!(app.hint, crate::game::FIRST_GUESS_HINT);
    }

    #[test]
    fn share_posts_emoji_rows() {
        let fixture = Fixture::new();
        let mut app = fixture.app();
        type_word(&mut app, "dark");
        press(&mut app, KeyCode::Tab);
        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"Today's Wordle 1/6"));
        assert!(texts.contains(&"🟩🟩🟩⬛"));
    }

    #[test]
    fn escape_quits() {
        let fixture = Fixture::new();
        let mut app = fixture.app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
