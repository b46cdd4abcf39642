//! A single game from first guess to game over
//!
//! The game owns its target, random stream, and guess history. Nothing is shared
//! between game instances, so several games can run side by side.

mod error;
mod session;

pub use error::GuessError;
pub use session::{FIRST_GUESS_HINT, Game, GameMode, GameState, Turn};
