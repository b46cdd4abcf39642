//! Per-letter feedback for a guess against the hidden target
//!
//! Each letter of a guess is classified as:
//! - Absent (letter not in word, or all its copies already accounted for)
//! - Elsewhere (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use std::cmp::Ordering;

/// Classification of one guessed letter
///
/// Ordered `Absent < Elsewhere < Correct` so the best clue seen for a letter can be kept with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    Absent,
    Elsewhere,
    Correct,
}

impl Clue {
    /// Position in the total order
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Elsewhere => 1,
            Self::Correct => 2,
        }
    }

    /// Word used when reading a clue aloud
    #[must_use]
    pub const fn spoken(self) -> &'static str {
        match self {
            Self::Absent => "no",
            Self::Elsewhere => "elsewhere",
            Self::Correct => "correct",
        }
    }

    /// True for `Elsewhere` and `Correct`
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl Ord for Clue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Clue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A guessed letter together with its clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CluedLetter {
    pub letter: u8,
    pub clue: Clue,
}

/// Feedback for a whole guess, one `CluedLetter` per position in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: Vec<CluedLetter>,
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Handles repeated letters exactly: no letter receives more `Correct` plus
    /// `Elsewhere` clues than it has copies in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the remaining demand
    /// 2. Second pass: mark present-but-misplaced letters while demand remains
    ///
    /// # Panics
    /// Panics if `guess` and `target` differ in length.
    ///
    /// # Examples
    /// ```
    /// use todays_wordle::core::{Clue, Feedback, Word};
    ///
    /// let guess = Word::new("dark").unwrap();
    /// let target = Word::new("dart").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.clues(), vec![Clue::Correct, Clue::Correct, Clue::Correct, Clue::Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess '{guess}' and target must have the same length"
        );

        let mut result = vec![Clue::Absent; guess.len()];
        let mut remaining = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Clue::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Clue::Absent
                && let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Clue::Elsewhere;
                *count -= 1;
            }
        }

        let letters = guess
            .chars()
            .iter()
            .zip(result)
            .map(|(&letter, clue)| CluedLetter { letter, clue })
            .collect();

        Self { letters }
    }

    /// Clued letters in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[CluedLetter] {
        &self.letters
    }

    /// Just the clues, in guess order
    #[must_use]
    pub fn clues(&self) -> Vec<Clue> {
        self.letters.iter().map(|c| c.clue).collect()
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.letters.iter().all(|c| c.clue == Clue::Correct)
    }

    /// Count positions carrying `clue`
    #[must_use]
    pub fn count(&self, clue: Clue) -> usize {
        self.letters.iter().filter(|c| c.clue == clue).count()
    }

    /// Copies of `letter` this feedback proves the target contains
    #[must_use]
    pub fn present_count(&self, letter: u8) -> usize {
        self.letters
            .iter()
            .filter(|c| c.letter == letter && c.clue.is_present())
            .count()
    }

    /// Screen-reader phrase, e.g. `"D correct, A correct, R correct, K no"`
    #[must_use]
    pub fn describe(&self) -> String {
        self.letters
            .iter()
            .map(|c| format!("{} {}", c.letter.to_ascii_uppercase() as char, c.clue.spoken()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Compare `guess` to `target`, producing one clue per letter
///
/// Shorthand for [`Feedback::calculate`].
#[must_use]
pub fn clue(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use Clue::{Absent, Correct, Elsewhere};

    fn feedback(guess: &str, target: &str) -> Feedback {
        clue(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn clue_order_is_absent_elsewhere_correct() {
        assert!(Absent < Elsewhere);
        assert!(Elsewhere < Correct);
        assert_eq!(Absent.max(Correct), Correct);
        assert_eq!([Elsewhere, Absent, Correct].iter().max(), Some(&Correct));
    }

    #[test]
    fn dark_against_dart() {
        let f = feedback("dark", "dart");
        assert_eq!(f.clues(), vec![Correct, Correct, Correct, Absent]);
        assert_eq!(f.letters()[3].letter, b'k');
        assert!(!f.is_perfect());
    }

    #[test]
    fn raid_against_dart() {
        let f = feedback("raid", "dart");
        assert_eq!(f.clues(), vec![Elsewhere, Correct, Absent, Elsewhere]);
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for word in ["dart", "crane", "sever", "aaaaa", "grasshopper"] {
            let f = feedback(word, word);
            assert!(f.is_perfect());
            assert_eq!(f.count(Correct), word.len());
        }
    }

    #[test]
    fn repeated_letters_limited_by_target_count() {
        // SEVER has two E's (positions 1 and 3); WHEEE has three
        let f = feedback("wheee", "sever");
        assert_eq!(f.clues(), vec![Absent, Absent, Elsewhere, Correct, Absent]);
        assert_eq!(f.present_count(b'e'), 2);
    }

    #[test]
    fn correct_takes_priority_over_elsewhere() {
        // ROBOT vs FLOOR: the second O is exact, the first borrows the other O
        let f = feedback("robot", "floor");
        assert_eq!(f.clues(), vec![Elsewhere, Elsewhere, Absent, Correct, Absent]);
    }

    #[test]
    fn later_exact_match_steals_earlier_elsewhere() {
        // Only one E in the target and it is matched exactly at the end
        let f = feedback("eerie", "crane");
        assert_eq!(f.clues(), vec![Absent, Absent, Elsewhere, Absent, Correct]);
    }

    #[test]
    fn describe_reads_each_letter() {
        assert_eq!(
            feedback("dark", "dart").describe(),
            "D correct, A correct, R correct, K no"
        );
        assert_eq!(
            feedback("raid", "dart").describe(),
            "R elsewhere, A correct, I no, D elsewhere"
        );
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn unequal_lengths_are_rejected() {
        let _ = feedback("dart", "crane");
    }

    fn same_length_pair() -> impl Strategy<Value = (String, String)> {
        (4usize..=11).prop_flat_map(|len| {
            let word = proptest::collection::vec(b'a'..=b'f', len)
                .prop_map(|bytes| String::from_utf8(bytes).unwrap());
            (word.clone(), word)
        })
    }

    proptest! {
        #[test]
        fn present_clues_never_exceed_target_copies((guess, target) in same_length_pair()) {
            let g = Word::new(&guess).unwrap();
            let t = Word::new(&target).unwrap();
            let f = clue(&g, &t);

            prop_assert_eq!(f.len(), g.len());
            for letter in b'a'..=b'f' {
                prop_assert!(f.present_count(letter) <= t.count_of(letter));
            }
        }

        #[test]
        fn correct_exactly_where_letters_match((guess, target) in same_length_pair()) {
            let g = Word::new(&guess).unwrap();
            let t = Word::new(&target).unwrap();
            let f = clue(&g, &t);

            for (i, clued) in f.letters().iter().enumerate() {
                prop_assert_eq!(clued.letter, g.char_at(i));
                prop_assert_eq!(clued.clue == Correct, g.char_at(i) == t.char_at(i));
            }
        }
    }
}
