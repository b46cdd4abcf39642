use chrono::NaiveDate;
use todays_wordle::challenge::{ChallengeError, encode};
use todays_wordle::config::GameConfig;
use todays_wordle::core::Word;
use todays_wordle::daily::{FixedDate, todays_seed};
use todays_wordle::game::{Game, GameMode, GameState, GuessError};
use todays_wordle::wordlists::{
    DEFAULT_CUTOFF, Dictionary, TargetPool,
    loader::{embedded_dictionary, embedded_pool},
};

fn fixtures() -> (Dictionary, TargetPool, FixedDate) {
    (
        embedded_dictionary(),
        embedded_pool(DEFAULT_CUTOFF),
        FixedDate(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()),
    )
}

#[test]
fn same_day_same_target() {
    let (dictionary, pool, dates) = fixtures();
    let config = GameConfig::default();

    let (first, _) = Game::start(&config, &pool, &dictionary, &dates, None).unwrap();
    let (second, _) = Game::start(&config, &pool, &dictionary, &dates, None).unwrap();

    assert_eq!(first.target(), second.target());
    assert_eq!(
        first.mode(),
        GameMode::Daily {
            seed: todays_seed(&dates),
            game_number: 1
        }
    );
}

#[test]
fn other_day_other_seed() {
    let (dictionary, pool, dates) = fixtures();
    let next_day = FixedDate(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    let config = GameConfig::default();

    let (today, _) = Game::start(&config, &pool, &dictionary, &dates, None).unwrap();
    let (tomorrow, _) = Game::start(&config, &pool, &dictionary, &next_day, None).unwrap();

    assert_ne!(today.mode(), tomorrow.mode());
}

#[test]
fn challenge_round_trip_then_daily() {
    let (dictionary, pool, dates) = fixtures();
    let config = GameConfig::default();
    let token = encode(&Word::new("crane").unwrap());

    let (mut game, rejected) =
        Game::start(&config, &pool, &dictionary, &dates, Some(&token)).unwrap();
    assert!(rejected.is_none());
    assert!(game.is_challenge());
    assert_eq!(game.target().text(), "crane");

    game.submit("slate", &dictionary).unwrap();
    let turn = game.submit("CRANE", &dictionary).unwrap();
    assert_eq!(turn.state, GameState::Won);
    assert_eq!(
        game.game_over_message().as_deref(),
        Some("You won! The answer was CRANE. (Enter to play today's wordle)")
    );

    game.next_game(&pool, &dates).unwrap();
    let (daily, _) = Game::start(&config, &pool, &dictionary, &dates, None).unwrap();
    assert!(!game.is_challenge());
    assert_eq!(game.mode(), daily.mode());
    assert_eq!(game.target(), daily.target());
    assert!(game.history().is_empty());
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn malformed_token_falls_back_to_daily() {
    let (dictionary, pool, dates) = fixtures();
    let config = GameConfig::default();

    let (game, rejected) =
        Game::start(&config, &pool, &dictionary, &dates, Some("!!not a token!!")).unwrap();
    let (daily, _) = Game::start(&config, &pool, &dictionary, &dates, None).unwrap();

    assert!(matches!(rejected, Some(ChallengeError::Malformed(_))));
    assert!(!game.is_challenge());
    assert_eq!(game.target(), daily.target());
}

#[test]
fn rejected_guesses_leave_history_alone() {
    let (dictionary, pool, dates) = fixtures();
    let token = encode(&Word::new("crane").unwrap());
    let (mut game, _) =
        Game::start(&GameConfig::default(), &pool, &dictionary, &dates, Some(&token)).unwrap();

    assert_eq!(
        game.submit("cra", &dictionary).unwrap_err().to_string(),
        "Too short"
    );
    assert!(matches!(
        game.submit("qzqzq", &dictionary),
        Err(GuessError::NotInDictionary)
    ));
    assert!(game.history().is_empty());
    assert_eq!(game.guesses_left(), 6);
}
