//! Constraints revealed by the feedback history
//!
//! Knowledge is derived from the union of all prior feedback, never from one guess
//! in isolation. A letter clued `Absent` somewhere and present elsewhere is not
//! banned; the absent copy only caps how many copies the target holds.

use crate::core::{Clue, Feedback, Word, clue};

/// Everything the player has been shown about the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    /// Letter known to sit at each position
    fixed: Vec<Option<u8>>,
    /// Letters known not to sit at each position, in the order they were revealed
    misplaced: Vec<Vec<u8>>,
    /// Minimum copies per letter, in order of first reveal
    required: Vec<(u8, usize)>,
    /// Upper bound per letter, learned from an `Absent` clue, in order of first reveal
    ceiling: Vec<(u8, usize)>,
}

impl Knowledge {
    /// Empty knowledge for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            fixed: vec![None; length],
            misplaced: vec![Vec::new(); length],
            required: Vec::new(),
            ceiling: Vec::new(),
        }
    }

    /// Recompute feedback for every prior guess against `target` and fold it in
    ///
    /// # Panics
    /// Panics if any guess differs in length from `target`.
    #[must_use]
    pub fn from_history(history: &[Word], target: &Word) -> Self {
        let mut knowledge = Self::new(target.len());
        for guess in history {
            knowledge.observe(&clue(guess, target));
        }
        knowledge
    }

    /// Fold already-computed feedback, in submission order
    #[must_use]
    pub fn from_feedback<'a>(
        length: usize,
        feedback: impl IntoIterator<Item = &'a Feedback>,
    ) -> Self {
        let mut knowledge = Self::new(length);
        for f in feedback {
            knowledge.observe(f);
        }
        knowledge
    }

    /// Merge the lessons of one guess
    ///
    /// # Panics
    /// Panics if the feedback length differs from the knowledge length.
    pub fn observe(&mut self, feedback: &Feedback) {
        assert_eq!(
            feedback.len(),
            self.fixed.len(),
            "feedback length must match the game's word length"
        );

        for (i, clued) in feedback.letters().iter().enumerate() {
            if clued.clue == Clue::Correct {
                self.fixed[i].get_or_insert(clued.letter);
            } else if !self.misplaced[i].contains(&clued.letter) {
                self.misplaced[i].push(clued.letter);
            }
        }

        for (i, clued) in feedback.letters().iter().enumerate() {
            // Letters repeat within a word; handle each value once
            if feedback.letters()[..i].iter().any(|c| c.letter == clued.letter) {
                continue;
            }

            let letter = clued.letter;
            let present = feedback.present_count(letter);
            if present > 0 {
                raise(&mut self.required, letter, present);
            }

            let absent = feedback
                .letters()
                .iter()
                .any(|c| c.letter == letter && c.clue == Clue::Absent);
            if absent {
                lower(&mut self.ceiling, letter, present);
            }
        }
    }

    /// Word length this knowledge describes
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }

    /// Positions whose letter is known, in position order
    pub fn fixed_letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.fixed
            .iter()
            .enumerate()
            .filter_map(|(i, letter)| letter.map(|l| (i, l)))
    }

    /// Letters ruled out at specific positions, in position order
    pub fn misplaced_letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.misplaced
            .iter()
            .enumerate()
            .flat_map(|(i, letters)| letters.iter().map(move |&l| (i, l)))
    }

    /// Minimum copies each revealed letter must appear
    pub fn required_letters(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.required.iter().copied()
    }

    /// Exact copy counts known from `Absent` clues
    ///
    /// An `Absent` clue caps the count at the copies proven present by the same guess,
    /// but never below what the rest of the history requires.
    pub fn exact_letters(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.ceiling
            .iter()
            .map(|&(letter, cap)| (letter, cap.max(self.required_count(letter))))
    }

    /// Minimum copies of `letter`
    #[must_use]
    pub fn required_count(&self, letter: u8) -> usize {
        lookup(&self.required, letter).unwrap_or(0)
    }

    /// Exact copies of `letter`, when known
    #[must_use]
    pub fn exact_count(&self, letter: u8) -> Option<usize> {
        lookup(&self.ceiling, letter).map(|cap| cap.max(self.required_count(letter)))
    }
}

fn lookup(counts: &[(u8, usize)], letter: u8) -> Option<usize> {
    counts
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|&(_, count)| count)
}

fn raise(counts: &mut Vec<(u8, usize)>, letter: u8, count: usize) {
    match counts.iter_mut().find(|(l, _)| *l == letter) {
        Some((_, existing)) => *existing = (*existing).max(count),
        None => counts.push((letter, count)),
    }
}

fn lower(counts: &mut Vec<(u8, usize)>, letter: u8, count: usize) {
    match counts.iter_mut().find(|(l, _)| *l == letter) {
        Some((_, existing)) => *existing = (*existing).min(count),
        None => counts.push((letter, count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn greens_fix_positions() {
        let knowledge = Knowledge::from_history(&[word("dark")], &word("dart"));
        let fixed: Vec<_> = knowledge.fixed_letters().collect();
        assert_eq!(fixed, vec![(0, b'd'), (1, b'a'), (2, b'r')]);
    }

    #[test]
    fn yellows_require_and_misplace() {
        let knowledge = Knowledge::from_history(&[word("raid")], &word("dart"));
        assert_eq!(knowledge.required_count(b'r'), 1);
        assert_eq!(knowledge.required_count(b'd'), 1);
        assert_eq!(knowledge.required_count(b'i'), 0);

        let misplaced: Vec<_> = knowledge.misplaced_letters().collect();
        assert_eq!(misplaced, vec![(0, b'r'), (2, b'i'), (3, b'd')]);
    }

    #[test]
    fn absent_letter_has_zero_ceiling() {
        let knowledge = Knowledge::from_history(&[word("dark")], &word("dart"));
        assert_eq!(knowledge.exact_count(b'k'), Some(0));
        assert_eq!(knowledge.exact_count(b'd'), None);
    }

    #[test]
    fn absent_copy_caps_instead_of_banning() {
        // EERIE vs SEVER: two E's proven present, the third E is absent
        let knowledge = Knowledge::from_history(&[word("eerie")], &word("sever"));
        assert_eq!(knowledge.required_count(b'e'), 2);
        assert_eq!(knowledge.exact_count(b'e'), Some(2));
    }

    #[test]
    fn requirements_take_maximum_across_history() {
        // THREE proves two E's, DRESS only one
        let target = word("sever");
        let knowledge = Knowledge::from_history(&[word("dress"), word("three")], &target);
        assert_eq!(knowledge.required_count(b'e'), 2);
        assert_eq!(knowledge.required_count(b's'), 1);
        assert_eq!(knowledge.exact_count(b's'), Some(1));
    }

    #[test]
    fn cached_feedback_matches_recomputation() {
        let target = word("sever");
        let history = [word("three"), word("eerie"), word("never")];
        let cached: Vec<Feedback> = history.iter().map(|g| clue(g, &target)).collect();

        assert_eq!(
            Knowledge::from_feedback(target.len(), &cached),
            Knowledge::from_history(&history, &target)
        );
    }
}
