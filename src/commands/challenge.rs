//! Challenge link creation and inspection

use super::{CommandError, parse_word};
use crate::challenge::{self, ChallengeError, CodecError, encode};
use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Number of words offered when the player does not pick one
pub const OPTION_COUNT: usize = 5;

/// A word together with the token that hides it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeLink {
    pub word: Word,
    pub token: String,
}

impl ChallengeLink {
    #[must_use]
    pub fn new(word: Word) -> Self {
        let token = encode(&word);
        Self { word, token }
    }

    /// Query string to append to the game's address
    #[must_use]
    pub fn query(&self) -> String {
        challenge::query_for(&self.word)
    }
}

/// Build a challenge on a word of the player's choosing
///
/// # Errors
/// Returns [`CommandError`] when the text is not a playable word or is missing
/// from the dictionary.
pub fn create_challenge(text: &str, dictionary: &Dictionary) -> Result<ChallengeLink, CommandError> {
    let word = parse_word(text)?;
    if !dictionary.contains(&word) {
        return Err(CommandError::UnknownWord(word.text().to_string()));
    }
    Ok(ChallengeLink::new(word))
}

/// Offer up to `count` distinct random dictionary words of `length` letters
///
/// # Examples
/// ```
/// use todays_wordle::commands::challenge_options;
/// use todays_wordle::wordlists::Dictionary;
///
/// let dictionary = Dictionary::new(["dart", "dark", "raid", "crane"]);
/// let options = challenge_options(&dictionary, 4, 5, &mut rand::rng());
/// assert_eq!(options.len(), 3);
/// ```
pub fn challenge_options<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Vec<ChallengeLink> {
    dictionary
        .words_of_length(length)
        .choose_multiple(rng, count)
        .filter_map(|text| Word::new(*text).ok())
        .map(ChallengeLink::new)
        .collect()
}

/// Reveal the word behind a token, checking it against the dictionary
///
/// # Errors
/// Returns [`CommandError::Challenge`] for blank or malformed tokens and for
/// words the dictionary does not contain.
pub fn decode_challenge(token: &str, dictionary: &Dictionary) -> Result<Word, CommandError> {
    challenge::from_token(Some(token), dictionary)?.ok_or_else(|| {
        ChallengeError::from(CodecError::MalformedToken("empty token".to_string())).into()
    })
}
