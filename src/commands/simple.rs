//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use super::CommandError;
use crate::daily::DateSource;
use crate::game::{FIRST_GUESS_HINT, Game, GameState};
use crate::output::formatters::{Palette, colored_row, describe_game, share_text};
use crate::wordlists::{Dictionary, TargetPool};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the next
/// game cannot pick a target.
pub fn run_simple(
    game: &mut Game,
    dictionary: &Dictionary,
    pool: &TargetPool,
    dates: &dyn DateSource,
    palette: Palette,
) -> Result<(), CommandError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(
        game,
        dictionary,
        pool,
        dates,
        palette,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Game loop over arbitrary line input, so tests can script a session
///
/// # Errors
///
/// Returns an error if I/O fails or the next game cannot pick a target.
pub fn play_lines<R: BufRead, W: Write>(
    game: &mut Game,
    dictionary: &Dictionary,
    pool: &TargetPool,
    dates: &dyn DateSource,
    palette: Palette,
    input: &mut R,
    out: &mut W,
) -> Result<(), CommandError> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Today's Wordle                           ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'share' to copy your result\n")?;
    print_intro(game, out)?;

    loop {
        let Some(line) = prompt(game, input, out)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        let line = line.to_lowercase();
        if is_playable(game, dictionary, &line) {
            submit_line(game, dictionary, palette, &line, out)?;
            continue;
        }

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "share" => writeln!(out, "\n{}\n", share_text(game, palette))?,
            _ if game.state().is_over() => {
                if matches!(line.as_str(), "yes" | "y") {
                    game.next_game(pool, dates)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    print_intro(game, out)?;
                } else {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
            guess => submit_line(game, dictionary, palette, guess, out)?,
        }
    }
}

/// A word the game would take, which wins over any command spelled the same
fn is_playable(game: &Game, dictionary: &Dictionary, line: &str) -> bool {
    !game.state().is_over() && line.len() == game.length() && dictionary.contains_str(line)
}

fn submit_line<W: Write>(
    game: &mut Game,
    dictionary: &Dictionary,
    palette: Palette,
    guess: &str,
    out: &mut W,
) -> io::Result<()> {
    match game.submit(guess, dictionary) {
        Ok(turn) => {
            writeln!(out, "{}", colored_row(&turn.feedback))?;
            writeln!(out, "{}", turn.feedback.describe().bright_black())?;
            if let Some(message) = game.game_over_message() {
                let banner = if turn.state == GameState::Won {
                    message.green().bold()
                } else {
                    message.red().bold()
                };
                writeln!(out, "\n{banner}\n")?;
                print_board(game, out)?;
                writeln!(out, "\n{}\n", share_text(game, palette))?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "❌ {}", err.to_string().yellow()),
    }
}

fn print_intro<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", describe_game(game).bright_black())?;
    writeln!(
        out,
        "{} letters, {} guesses, {} mode\n",
        game.length(),
        game.max_guesses(),
        game.difficulty()
    )?;
    writeln!(out, "{FIRST_GUESS_HINT}")
}

fn print_board<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    for (i, feedback) in game.feedback().iter().enumerate() {
        writeln!(out, "  {}. {}", (i + 1).to_string().bright_black(), colored_row(feedback))?;
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    if game.state().is_over() {
        write!(out, "Play again? (yes/no): ")?;
    } else {
        write!(
            out,
            "Guess {}/{}: ",
            game.history().len() + 1,
            game.max_guesses()
        )?;
    }
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::daily::FixedDate;
    use chrono::NaiveDate;

    const WORDS: [&str; 8] = ["dart", "dark", "raid", "bank", "card", "share", "crane", "quit"];

    fn session(script: &str) -> (Game, String) {
        session_on("dart", script)
    }

    fn session_on(target: &str, script: &str) -> (Game, String) {
        colored::control::set_override(false);
        let dictionary = Dictionary::new(WORDS);
        let pool = TargetPool::new(["dart", "dark", "raid", "bank", "card"]);
        let dates = FixedDate(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let mut game = Game::challenge(&GameConfig::default(), Word::new(target).unwrap());

        let mut input = script.as_bytes();
        let mut out = Vec::new();
        play_lines(
            &mut game,
            &dictionary,
            &pool,
            &dates,
            Palette::Standard,
            &mut input,
            &mut out,
        )
        .unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_to_a_win() {
        let (game, out) = session("dark\ndart\nno\n");
        assert_eq!(game.state(), GameState::Won);
        assert!(out.contains("You won! The answer was DART."));
        assert!(out.contains("Today's Wordle 2/6"));
        assert!(out.contains("D correct, A correct, R correct, K no"));
    }

    #[test]
    fn shows_rejection_hints() {
        let (game, out) = session("dar\nzzzz\nq\n");
        assert!(game.history().is_empty());
        assert!(out.contains("Too short"));
        assert!(out.contains("Not a valid word"));
    }

    #[test]
    fn command_words_can_be_guessed() {
        let (game, out) = session_on("share", "crane\nshare\nno\n");
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.history().len(), 2);
        assert!(out.contains("You won! The answer was SHARE."));

        // QUIT is a four-letter word in this dictionary
        let (game, _) = session("quit\nq\n");
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn share_is_a_command_when_it_cannot_be_a_guess() {
        let (game, out) = session("dark\nshare\nq\n");
        assert_eq!(game.history().len(), 1);
        assert!(out.contains("Today's Wordle 1/6"));
    }

    #[test]
    fn next_game_after_challenge_is_daily() {
        let (game, out) = session("dart\nyes\n");
        assert!(!game.is_challenge());
        assert!(game.history().is_empty());
        assert!(out.contains("New game started"));
    }
}
