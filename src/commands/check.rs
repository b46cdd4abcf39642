//! Run the consistency rules outside a game

use super::{CommandError, parse_word};
use crate::core::{Difficulty, Feedback, Word, clue};
use crate::rules::{Knowledge, Violation, verify};

/// Outcome of checking one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub difficulty: Difficulty,
    pub target: Word,
    /// Earlier guesses with the feedback they earned
    pub history: Vec<(Word, Feedback)>,
    pub candidate: Word,
    pub verdict: Result<(), Violation>,
}

impl CheckResult {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check whether `candidate` could follow `history` when the answer is `target`
///
/// Dictionary membership is not checked; any playable word can be tested.
///
/// # Errors
/// Returns [`CommandError`] when a word is not playable or differs in length
/// from the target.
pub fn run_check(
    difficulty: Difficulty,
    target: &str,
    history: &[String],
    candidate: &str,
) -> Result<CheckResult, CommandError> {
    let target = parse_word(target)?;
    let same_length = |text: &str| -> Result<Word, CommandError> {
        let word = parse_word(text)?;
        if word.len() == target.len() {
            Ok(word)
        } else {
            Err(CommandError::LengthMismatch {
                word: word.text().to_string(),
                expected: target.len(),
                got: word.len(),
            })
        }
    };

    let guesses = history
        .iter()
        .map(|text| same_length(text.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let candidate = same_length(candidate)?;

    let history: Vec<(Word, Feedback)> = guesses
        .into_iter()
        .map(|guess| {
            let feedback = clue(&guess, &target);
            (guess, feedback)
        })
        .collect();

    let knowledge = Knowledge::from_feedback(target.len(), history.iter().map(|(_, f)| f));
    let verdict = verify(difficulty, &knowledge, &candidate);
    tracing::debug!(%candidate, ?verdict, "checked candidate");

    Ok(CheckResult {
        difficulty,
        target,
        history,
        candidate,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reports_the_violation() {
        let result = run_check(Difficulty::Hard, "dart", &history(&["dark"]), "wart").unwrap();
        assert!(!result.accepted());
        assert_eq!(
            result.verdict.unwrap_err().to_string(),
            "1st letter must be D"
        );
        assert_eq!(result.history.len(), 1);
    }

    #[test]
    fn accepts_consistent_candidates() {
        let result =
            run_check(Difficulty::UltraHard, "sever", &history(&["three", "eerie"]), "seder")
                .unwrap();
        assert!(result.accepted());
    }

    #[test]
    fn agrees_with_in_game_rules() {
        let guesses = ["three", "eerie"];
        let target = Word::new("sever").unwrap();
        let words: Vec<Word> = guesses.iter().map(|g| Word::new(*g).unwrap()).collect();
        for candidate in ["seder", "never", "wider", "sever", "eeeee"] {
            let result =
                run_check(Difficulty::UltraHard, "sever", &history(&guesses), candidate).unwrap();
            let in_game = crate::rules::check(
                Difficulty::UltraHard,
                &words,
                &target,
                &Word::new(candidate).unwrap(),
            );
            assert_eq!(result.verdict, in_game, "{candidate}");
        }
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = run_check(Difficulty::Hard, "dart", &history(&["crane"]), "dark").unwrap_err();
        assert!(matches!(
            err,
            CommandError::LengthMismatch {
                expected: 4,
                got: 5,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unplayable_text() {
        let err = run_check(Difficulty::Normal, "dart", &[], "d4rt").unwrap_err();
        assert!(matches!(err, CommandError::InvalidWord { .. }));
    }
}
