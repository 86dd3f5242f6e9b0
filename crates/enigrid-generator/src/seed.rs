//! Reproducibility seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed that makes puzzle generation reproducible.
///
/// The text form is 64 lowercase hex characters. Seeds can be drawn from the
/// system RNG ([`random`](Self::random)) or derived from an arbitrary phrase
/// ([`from_phrase`](Self::from_phrase)) so that a puzzle can be shared as a
/// short human-readable string.
///
/// # Examples
///
/// ```
/// use enigrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily #1024");
/// let round_trip: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, round_trip);
/// # Ok::<(), enigrid_generator::ParsePuzzleSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the system RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from its 64-character hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleSeedError {
    /// The input did not contain exactly 64 characters.
    #[display("expected 64 hex characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A character was not a hex digit.
    #[display("invalid hex character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its index in the input string.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParsePuzzleSeedError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        for (index, character) in s.chars().enumerate() {
            let Some(value) = character.to_digit(16) else {
                return Err(ParsePuzzleSeedError::InvalidCharacter { character, index });
            };
            #[expect(clippy::cast_possible_truncation)]
            {
                bytes[index / 2] = bytes[index / 2] << 4 | value as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_phrase("round trip");
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        assert_eq!(
            PuzzleSeed::from_phrase("daily #7"),
            PuzzleSeed::from_phrase("daily #7")
        );
        assert_ne!(
            PuzzleSeed::from_phrase("daily #7"),
            PuzzleSeed::from_phrase("daily #8")
        );
    }

    #[test]
    fn test_parse_known_value() {
        let seed: PuzzleSeed = "00ff".repeat(16).parse().expect("valid seed");
        assert_eq!(seed.as_bytes()[0], 0x00);
        assert_eq!(seed.as_bytes()[1], 0xff);
        assert_eq!(seed.to_string(), "00ff".repeat(16));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidLength(3))
        );
        assert_eq!(
            format!("g{}", "0".repeat(63)).parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidCharacter {
                character: 'g',
                index: 0,
            })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // Not a statistical test, just a sanity check that the RNG is wired up.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(text in "[0-9a-f]{64}") {
            let seed: PuzzleSeed = text.parse().unwrap();
            prop_assert_eq!(seed.to_string(), text);
        }
    }
}
