//! Today's Wordle - CLI
//!
//! Daily word puzzle with hard modes, challenge links and a terminal UI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use todays_wordle::{
    challenge::INVALID_CHALLENGE_HINT,
    commands::{
        challenge::OPTION_COUNT, challenge_options, create_challenge, decode_challenge,
        run_calendar, run_check, run_simple, run_today,
    },
    config::{GameConfig, MAX_GUESSES},
    core::{DEFAULT_LENGTH, Difficulty},
    daily::{DateSource, FixedDate, SystemDate},
    game::{FIRST_GUESS_HINT, Game},
    output::{
        Palette, print_calendar, print_challenge_links, print_check_result, print_decoded,
        print_today_result,
    },
    wordlists::{
        Dictionary,
        loader::{embedded_dictionary, embedded_pool, load_dictionary},
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "todays_wordle",
    about = "Daily word puzzle with hard modes and shareable challenge links",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word, 4 to 11 (anything else plays 5)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Difficulty: normal, hard, ultra (or 0, 1, 2)
    #[arg(short, long, global = true, default_value = "normal")]
    difficulty: Difficulty,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Which of the day's games to play, 1 to 1000
    #[arg(short, long, global = true, default_value_t = 1)]
    game: u32,

    /// Play this seed instead of today's
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Play a random game instead of the daily one
    #[arg(long, global = true)]
    random: bool,

    /// Start from a challenge link token
    #[arg(long, global = true)]
    challenge: Option<String>,

    /// High-contrast share colors
    #[arg(long, global = true)]
    colorblind: bool,

    /// Dictionary file with one word per line (embedded list by default)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show which daily puzzle is live
    Today {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Create a challenge link for a word, or offer random words to pick from
    Challenge {
        /// Word to hide in the link
        word: Option<String>,

        /// How many random words to offer
        #[arg(short = 'n', long, default_value_t = OPTION_COUNT)]
        count: usize,
    },

    /// Reveal the word behind a challenge token
    Decode {
        /// Token from a challenge link
        token: String,
    },

    /// Check whether a guess respects earlier clues under the chosen difficulty
    Check {
        /// The hidden word
        target: String,

        /// The guess to check
        candidate: String,

        /// Earlier guesses, comma separated
        #[arg(short, long, value_delimiter = ',')]
        after: Vec<String>,
    },

    /// List daily answers for a range of dates
    Calendar {
        /// First date (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of days
        #[arg(short = 'n', long, default_value_t = 7)]
        days: usize,

        /// Start each day's game this many times and compare the answers
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "todays_wordle=warn",
        1 => "todays_wordle=info",
        _ => "todays_wordle=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_words(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => {
            let dictionary = load_dictionary(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            tracing::info!(path = %path.display(), words = dictionary.len(), "loaded word list");
            Ok(dictionary)
        }
        None => Ok(embedded_dictionary()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::new()
        .with_length(cli.length)
        .with_difficulty(cli.difficulty)
        .with_max_guesses(cli.max_guesses)
        .with_game_number(cli.game)
        .with_seed(cli.seed)
        .with_random(cli.random);
    let dates: Box<dyn DateSource> = match cli.date {
        Some(date) => Box::new(FixedDate(date)),
        None => Box::new(SystemDate),
    };
    let palette = Palette::new(cli.colorblind);

    let dictionary = load_words(cli.wordlist.as_deref())?;
    let pool = embedded_pool(&config.cutoff);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            use todays_wordle::interactive::{App, run_tui};

            let token = cli.challenge.as_deref();
            let (game, rejected) = Game::start(&config, &pool, &dictionary, dates.as_ref(), token)?;
            let hint = if rejected.is_some() {
                INVALID_CHALLENGE_HINT
            } else {
                FIRST_GUESS_HINT
            };
            let app = App::new(game, &dictionary, &pool, dates.as_ref(), palette, hint);
            run_tui(app)
        }
        Commands::Simple => {
            let token = cli.challenge.as_deref();
            let (mut game, rejected) =
                Game::start(&config, &pool, &dictionary, dates.as_ref(), token)?;
            if rejected.is_some() {
                println!("{INVALID_CHALLENGE_HINT}");
            }
            run_simple(&mut game, &dictionary, &pool, dates.as_ref(), palette)?;
            Ok(())
        }
        Commands::Today { reveal } => {
            let result = run_today(&config, &pool, dates.as_ref(), reveal)?;
            print_today_result(&result);
            Ok(())
        }
        Commands::Challenge { word, count } => {
            let links = match word {
                Some(word) => vec![create_challenge(&word, &dictionary)?],
                None => challenge_options(&dictionary, config.length, count, &mut rand::rng()),
            };
            print_challenge_links(&links);
            Ok(())
        }
        Commands::Decode { token } => {
            let word = decode_challenge(&token, &dictionary)?;
            print_decoded(&token, &word);
            Ok(())
        }
        Commands::Check {
            target,
            candidate,
            after,
        } => {
            let result = run_check(config.difficulty, &target, &after, &candidate)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Calendar { from, days, repeat } => {
            let start = from.unwrap_or_else(|| dates.today());
            let report = run_calendar(&config, &pool, start, days, repeat, true)?;
            print_calendar(&report);
            Ok(())
        }
    }
}
