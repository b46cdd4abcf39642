//! Closed set of guessable words

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Case-insensitive membership test over every valid guess
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from raw entries, skipping anything that is not a playable word
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| Word::new(entry.as_ref().trim()).ok())
            .map(|word| word.text().to_string())
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    /// Membership for unvalidated text
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        self.words.contains(&text.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words of `length` letters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|w| w.len() == length)
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = Dictionary::new(["Dart", "dark", "crane"]);
        assert!(dictionary.contains(&Word::new("DART").unwrap()));
        assert!(dictionary.contains_str("Crane"));
        assert!(!dictionary.contains_str("wart"));
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let dictionary = Dictionary::new(["dart", "abc", "sh*ll", "", "  crane  "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_str("crane"));
    }

    #[test]
    fn words_of_length_filters_and_sorts() {
        let dictionary = Dictionary::new(["slate", "dart", "crane", "dark"]);
        assert_eq!(dictionary.words_of_length(5), vec!["crane", "slate"]);
        assert_eq!(dictionary.words_of_length(4), vec!["dark", "dart"]);
        assert!(dictionary.words_of_length(7).is_empty());
    }
}
