//! Strictness levels for guess validation

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How much of the revealed information later guesses must respect
///
/// Ordered by increasing strictness; every level enforces the rules of the levels below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Any dictionary word is accepted
    #[default]
    Normal,
    /// Green letters stay fixed and yellow letters must be reused
    Hard,
    /// Yellow letters must move and known-absent letters are banned
    UltraHard,
}

/// Error for an unrecognized difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected normal, hard or ultra)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// All levels from least to most strict
    pub const ALL: [Self; 3] = [Self::Normal, Self::Hard, Self::UltraHard];

    /// Short lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::UltraHard => "ultra",
        }
    }

    /// Whether green/yellow reuse rules apply
    #[inline]
    #[must_use]
    pub fn is_hard(self) -> bool {
        self >= Self::Hard
    }

    /// Whether placement and exclusion rules apply
    #[inline]
    #[must_use]
    pub fn is_ultra(self) -> bool {
        self >= Self::UltraHard
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts names as well as the stored numeric levels `0`, `1`, `2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "0" => Ok(Self::Normal),
            "hard" | "1" => Ok(Self::Hard),
            "ultra" | "ultrahard" | "ultra-hard" | "2" => Ok(Self::UltraHard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_strictness_order() {
        assert!(Difficulty::Normal < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::UltraHard);
        assert!(!Difficulty::Normal.is_hard());
        assert!(Difficulty::UltraHard.is_hard());
        assert!(!Difficulty::Hard.is_ultra());
    }

    #[test]
    fn difficulty_parse_names_and_levels() {
        assert_eq!("hard".parse(), Ok(Difficulty::Hard));
        assert_eq!("Ultra".parse(), Ok(Difficulty::UltraHard));
        assert_eq!("0".parse(), Ok(Difficulty::Normal));
        assert_eq!("2".parse(), Ok(Difficulty::UltraHard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_display_round_trips() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }
}
