//! Word lists
//!
//! The guess dictionary and the frequency-ranked target list, embedded at build time.

mod dictionary;
mod embedded;
pub mod loader;
mod pool;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
pub use pool::{DEFAULT_CUTOFF, MARKER, TargetPool, is_marked};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_LENGTH, MIN_LENGTH, Word};

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn dictionary_entries_are_valid_words() {
        for &word in DICTIONARY {
            assert!(Word::new(word).is_ok(), "'{word}' is not a playable word");
            assert_eq!(word, word.to_lowercase(), "'{word}' is not lowercase");
        }
    }

    #[test]
    fn eligible_targets_are_guessable() {
        let dictionary = Dictionary::new(DICTIONARY);
        let pool = TargetPool::ranked_prefix(TARGETS, DEFAULT_CUTOFF);

        for entry in pool.entries().iter().filter(|e| !is_marked(e)) {
            assert!(dictionary.contains_str(entry), "target '{entry}' not in dictionary");
        }
    }

    #[test]
    fn every_length_has_targets() {
        let pool = TargetPool::ranked_prefix(TARGETS, DEFAULT_CUTOFF);
        for length in MIN_LENGTH..=MAX_LENGTH {
            let eligible = pool.of_length(length);
            assert!(
                eligible.iter().any(|e| !is_marked(e)),
                "no {length}-letter targets"
            );
        }
    }

    #[test]
    fn pool_contains_marked_entries() {
        let pool = TargetPool::ranked_prefix(TARGETS, DEFAULT_CUTOFF);
        assert!(pool.entries().iter().any(|e| e.contains(MARKER)));
    }
}
