//! Daily puzzle selection
//!
//! A date-derived seed drives a reproducible stream, and the stream picks the
//! target from the frequency-ranked pool.

pub mod random;
pub mod seed;
mod selector;

pub use random::{EntropySource, Mulberry32, RandomSource, RandomStream};
pub use seed::{DateSource, FixedDate, SystemDate, date_for, describe_seed, seed_for, todays_seed};
pub use selector::{SelectError, select_target};
