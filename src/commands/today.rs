//! Today's puzzle
//!
//! Reports which puzzle the daily seed selects, optionally revealing the answer.

use super::CommandError;
use crate::config::GameConfig;
use crate::core::Word;
use crate::daily::{DateSource, describe_seed, todays_seed};
use crate::game::Game;
use crate::wordlists::TargetPool;

/// Which daily puzzle is live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayResult {
    pub seed: u32,
    /// `"January 3, 2024"` or `"seed N"`
    pub description: String,
    pub length: usize,
    pub game_number: u32,
    /// Present only when the answer was asked for
    pub target: Option<Word>,
}

/// Look up the daily puzzle for `config` on the date `dates` reports
///
/// # Errors
/// Returns [`CommandError::Select`] when no target is eligible.
pub fn run_today(
    config: &GameConfig,
    pool: &TargetPool,
    dates: &dyn DateSource,
    reveal: bool,
) -> Result<TodayResult, CommandError> {
    let seed = config.seed.unwrap_or_else(|| todays_seed(dates));
    let game = Game::daily(config, pool, dates)?;

    if reveal {
        tracing::info!(seed, target = %game.target(), "revealing the daily answer");
    }

    Ok(TodayResult {
        seed,
        description: describe_seed(seed),
        length: game.length(),
        game_number: config.game_number,
        target: reveal.then(|| game.target().clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::FixedDate;
    use chrono::NaiveDate;

    fn jan_3() -> FixedDate {
        FixedDate(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
    }

    #[test]
    fn hides_the_answer_by_default() {
        let pool = TargetPool::new(["dart", "dark", "crane"]);
        let result = run_today(&GameConfig::default(), &pool, &jan_3(), false).unwrap();
        assert_eq!(result.seed, 20_240_103);
        assert_eq!(result.description, "January 3, 2024");
        assert_eq!(result.length, 5);
        assert!(result.target.is_none());
    }

    #[test]
    fn reveal_matches_the_played_game() {
        let pool = TargetPool::new(["dart", "dark", "raid", "wart", "card", "bank"]);
        let config = GameConfig::default().with_length(4);
        let result = run_today(&config, &pool, &jan_3(), true).unwrap();
        let game = Game::daily(&config, &pool, &jan_3()).unwrap();
        assert_eq!(result.target.as_ref(), Some(game.target()));
    }
}
