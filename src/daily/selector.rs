//! Target selection
//!
//! Draws the game's target from the frequency-ranked pool.

use super::random::RandomSource;
use crate::core::{Word, WordError};
use crate::wordlists::{TargetPool, is_marked};
use thiserror::Error;

/// Why no target could be chosen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no {length}-letter words are eligible targets")]
    EmptyPool { length: usize },
    #[error("target pool entry is not a playable word: {0}")]
    InvalidWord(#[from] WordError),
}

/// Pick a target of `length` letters from `pool`
///
/// Draws `floor(eligible * rng.next())` repeatedly until an unmarked entry comes
/// up. Every rejected draw consumes one value from the stream, which keeps the
/// sequence of targets identical to the reference game.
///
/// # Errors
/// Returns [`SelectError::EmptyPool`] when no unmarked entry has `length` letters.
///
/// # Examples
/// ```
/// use todays_wordle::daily::{Mulberry32, select_target};
/// use todays_wordle::wordlists::TargetPool;
///
/// let pool = TargetPool::new(["dart", "crane", "slate"]);
/// let target = select_target(&pool, 4, &mut Mulberry32::new(1)).unwrap();
/// assert_eq!(target.text(), "dart");
/// ```
pub fn select_target<R: RandomSource + ?Sized>(
    pool: &TargetPool,
    length: usize,
    rng: &mut R,
) -> Result<Word, SelectError> {
    let eligible = pool.of_length(length);

    // Guard the retry loop: it would never end if every entry were marked
    if eligible.iter().all(|entry| is_marked(entry)) {
        return Err(SelectError::EmptyPool { length });
    }

    loop {
        let candidate = eligible[rng.next_index(eligible.len())];
        if is_marked(candidate) {
            tracing::trace!(candidate, "skipping marked entry");
            continue;
        }

        tracing::debug!(length, eligible = eligible.len(), "selected target");
        return Ok(Word::new(candidate)?);
    }
}
