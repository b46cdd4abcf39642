//! Reversible obfuscation for challenge links
//!
//! Each letter is XORed with a fixed byte and the result is written in the
//! URL-safe base64 alphabet. This only keeps the target from being readable in
//! a shared link; it is not encryption.

use crate::core::{Word, WordError};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;

/// Byte every character is XORed with
const KEY: u8 = 0x7F;

/// URL-safe alphabet, no padding on output, padding tolerated on input
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be turned back into a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("malformed challenge token: {0}")]
    MalformedToken(String),
}

/// Obfuscate a word into a link-safe token
///
/// # Examples
/// ```
/// use todays_wordle::challenge::{decode, encode};
/// use todays_wordle::core::Word;
///
/// let word = Word::new("crane").unwrap();
/// let token = encode(&word);
/// assert_eq!(token, "HA0eERo");
/// assert_eq!(decode(&token).unwrap(), word);
/// ```
#[must_use]
pub fn encode(word: &Word) -> String {
    let masked: Vec<u8> = word.chars().iter().map(|&c| c ^ KEY).collect();
    TOKEN_ENGINE.encode(masked)
}

/// Recover the word hidden in a token
///
/// Accepts tokens written with either the URL-safe or the standard base64
/// alphabet, with or without padding.
///
/// # Errors
/// Returns [`CodecError::MalformedToken`] when the text is not valid base64 or
/// does not hide a playable word.
pub fn decode(token: &str) -> Result<Word, CodecError> {
    let normalized: String = token
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = TOKEN_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| CodecError::MalformedToken(e.to_string()))?;

    let text: String = bytes.into_iter().map(|b| char::from(b ^ KEY)).collect();

    Word::new(text).map_err(|e: WordError| CodecError::MalformedToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;

    #[test]
    fn encode_matches_reference_tokens() {
        assert_eq!(encode(&Word::new("crane").unwrap()), "HA0eERo");
        assert_eq!(encode(&Word::new("dart").unwrap()), "Gx4NCw");
        assert_eq!(encode(&Word::new("abcdefghijk").unwrap()), "Hh0cGxoZGBcWFRQ");
    }

    #[test]
    fn decode_accepts_padded_standard_tokens() {
        assert_eq!(decode("Gx4NCw==").unwrap().text(), "dart");
        assert_eq!(decode("EgoNFAY=").unwrap().text(), "murky");
        assert_eq!(decode("  EgoNFAY  ").unwrap().text(), "murky");
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(matches!(decode("not base64!"), Err(CodecError::MalformedToken(_))));
        assert!(matches!(decode("%%%%"), Err(CodecError::MalformedToken(_))));
    }

    #[test]
    fn decode_rejects_non_words() {
        // Valid base64, but hides "ab" which is too short
        let short = TOKEN_ENGINE.encode([b'a' ^ KEY, b'b' ^ KEY]);
        assert!(matches!(decode(&short), Err(CodecError::MalformedToken(_))));

        // Plain base64 of "crane" XORs into control characters
        assert!(decode("Y3JhbmU").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn round_trips_random_dictionary_words() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let word = Word::new(*DICTIONARY.choose(&mut rng).unwrap()).unwrap();
            assert_eq!(decode(&encode(&word)).unwrap(), word);
        }
    }

    proptest! {
        #[test]
        fn tokens_are_url_safe(text in "[a-z]{4,11}") {
            let token = encode(&Word::new(text).unwrap());
            prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }

        #[test]
        fn decode_never_panics(token in "\\PC*") {
            let _ = decode(&token);
        }
    }
}
