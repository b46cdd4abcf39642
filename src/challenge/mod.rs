//! Challenge games
//!
//! A challenge fixes the target through a shared link token instead of the daily seed.

mod codec;

pub use codec::{CodecError, decode, encode};

use crate::core::Word;
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a challenge token could not start a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error(transparent)]
    Malformed(#[from] CodecError),
    #[error("challenge word '{0}' is not in the dictionary")]
    UnknownWord(String),
}

/// Hint shown when a challenge link is rejected
pub const INVALID_CHALLENGE_HINT: &str = "Invalid challenge string, playing random game.";

/// Resolve a challenge token into a playable target
///
/// An absent or blank token means no challenge was requested.
///
/// # Errors
/// Returns [`ChallengeError`] when the token is malformed or hides a word the
/// dictionary does not know.
pub fn from_token(
    token: Option<&str>,
    dictionary: &Dictionary,
) -> Result<Option<Word>, ChallengeError> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let word = decode(token)?;
    if !dictionary.contains(&word) {
        return Err(ChallengeError::UnknownWord(word.text().to_string()));
    }

    Ok(Some(word))
}

/// Link query string for a challenge on `word`
#[must_use]
pub fn query_for(word: &Word) -> String {
    format!("?challenge={}", encode(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["dart", "crane", "murky"])
    }

    #[test]
    fn no_token_no_challenge() {
        assert_eq!(from_token(None, &dictionary()), Ok(None));
        assert_eq!(from_token(Some("   "), &dictionary()), Ok(None));
    }

    #[test]
    fn valid_token_yields_word() {
        let word = from_token(Some("HA0eERo"), &dictionary()).unwrap();
        assert_eq!(word.map(|w| w.text().to_string()), Some("crane".to_string()));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let token = encode(&Word::new("wart").unwrap());
        assert_eq!(
            from_token(Some(token.as_str()), &dictionary()),
            Err(ChallengeError::UnknownWord("wart".to_string()))
        );
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(matches!(
            from_token(Some("!!!"), &dictionary()),
            Err(ChallengeError::Malformed(_))
        ));
    }

    #[test]
    fn query_embeds_token() {
        assert_eq!(query_for(&Word::new("dart").unwrap()), "?challenge=Gx4NCw");
    }
}
