//! Guess consistency rules
//!
//! Hard and ultra-hard modes force later guesses to use what earlier feedback revealed.

mod knowledge;
mod validator;
pub mod wording;

pub use knowledge::Knowledge;
pub use validator::{Violation, check, verify};
