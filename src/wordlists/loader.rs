//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DICTIONARY, Dictionary, TARGETS, TargetPool};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Invalid lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use todays_wordle::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines()))
}

/// Dictionary compiled into the binary
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(DICTIONARY)
}

/// Target pool compiled into the binary, cut at `cutoff`
#[must_use]
pub fn embedded_pool(cutoff: &str) -> TargetPool {
    TargetPool::ranked_prefix(TARGETS, cutoff)
}
