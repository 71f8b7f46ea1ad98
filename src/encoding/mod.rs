//! Phonetic encoding of surnames.
//!
//! This module implements a modified Soundex that maps any string to a
//! fixed-length code of four digits. Names that sound alike map to the same
//! code, so code equality stands in for phonetic similarity.
//!
//! The encoding rules, applied in order:
//!
//! 1. All non-alphabetic characters are ignored.
//! 2. Word case is not significant.
//! 3. After the first letter, any occurrence of A, E, I, H, O, U, W, Y is
//!    discarded.
//! 4. The remaining letters are grouped into six equivalence classes (see
//!    [`SoundClass`]); each letter after the first contributes its class
//!    digit.
//! 5. Consecutive occurrences of equivalent letters are considered a single
//!    occurrence.
//!
//! Unlike classic Soundex, the leading letter is not retained: it only seeds
//! the collapse state, so the output is digits throughout. The code is
//! truncated at four digits and right-padded with `0`.
//!
//! # Example
//!
//! ```rust
//! use libsoundex::encoding::encode;
//!
//! assert_eq!(encode("Smith"), encode("Smyth"));
//! assert_eq!(encode("Smith").as_str(), "5400");
//! assert_ne!(encode("Smith"), encode("Jones"));
//! ```

use smallvec::SmallVec;

mod classes;

pub use classes::{is_discarded, SoundClass};

/// Number of digits in a phonetic code.
pub const CODE_LEN: usize = 4;

/// The digit used to pad codes shorter than [`CODE_LEN`].
const PAD: u8 = b'0';

/// A fixed-length phonetic code.
///
/// Always exactly four ASCII characters over the alphabet `0`-`6`: class
/// digits `1`-`6` plus the pad digit `0`. Two names are considered
/// phonetically equivalent exactly when their codes are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LEN]);

impl Code {
    /// View the code as a string slice.
    pub fn as_str(&self) -> &str {
        // The encoder only ever stores ASCII digits.
        std::str::from_utf8(&self.0).expect("code bytes are ASCII digits")
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Encode a string to its four-digit phonetic code.
///
/// Total over all inputs: spaces, punctuation and digits are stripped, case
/// is ignored, and degenerate inputs (empty, or no letters at all, or a
/// single letter) encode to `"0000"`.
///
/// # Examples
///
/// ```rust
/// use libsoundex::encoding::encode;
///
/// assert_eq!(encode("Robert"), encode("Rupert"));
/// assert_eq!(encode("O'Brien"), encode("OBrien"));
/// assert_eq!(encode("").as_str(), "0000");
/// ```
pub fn encode(input: &str) -> Code {
    // Steps 1-2 in one pass: keep ASCII letters only, and after the first
    // kept letter drop the discarded set.
    let mut working: SmallVec<[u8; 16]> = SmallVec::new();
    for byte in input.bytes() {
        if !byte.is_ascii_alphabetic() {
            continue;
        }
        if working.is_empty() || !is_discarded(byte) {
            working.push(byte.to_ascii_lowercase());
        }
    }

    let mut digits = [PAD; CODE_LEN];
    if let Some((&first, rest)) = working.split_first() {
        // The first letter never emits a digit; its class only seeds the
        // collapse state, so a second letter of the same class is silent too.
        let mut previous = SoundClass::of(first);
        let mut emitted = 0;
        for &letter in rest {
            let class = SoundClass::of(letter);
            if class != previous {
                digits[emitted] = class.digit();
                emitted += 1;
                if emitted == CODE_LEN {
                    break;
                }
            }
            previous = class;
        }
    }

    // Digits have no case; the contract nevertheless promises an uppercased
    // code, so finalize through the same step a lettered code would take.
    digits.make_ascii_uppercase();
    Code(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_codes() {
        // Hand-traced through the rules above.
        assert_eq!(encode("Smith").as_str(), "5400");
        assert_eq!(encode("Smyth").as_str(), "5400");
        assert_eq!(encode("Jones").as_str(), "5200");
        assert_eq!(encode("Robert").as_str(), "3640");
        assert_eq!(encode("Rupert").as_str(), "3640");
        assert_eq!(encode("O'Brien").as_str(), "3650");
        assert_eq!(encode("Mc Donald").as_str(), "2456");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(encode("").as_str(), "0000");
        assert_eq!(encode("A").as_str(), "0000");
        assert_eq!(encode("z").as_str(), "0000");
        assert_eq!(encode("123").as_str(), "0000");
        assert_eq!(encode("!@# $%^").as_str(), "0000");
    }

    #[test]
    fn test_case_is_not_significant() {
        assert_eq!(encode("Smith"), encode("SMITH"));
        assert_eq!(encode("Smith"), encode("smith"));
        assert_eq!(encode("McDonald"), encode("mcdonald"));
    }

    #[test]
    fn test_non_alphabetic_characters_are_ignored() {
        assert_eq!(encode("O'Brien"), encode("OBrien"));
        assert_eq!(encode("Mc Donald"), encode("McDonald"));
        assert_eq!(encode("Sm1th"), encode("Smth"));
    }

    #[test]
    fn test_consecutive_equivalents_collapse() {
        // After discarding, "Pfeiffer" leaves p + f,f,r: the doubled f
        // collapses, and the leading p silences the first f entirely.
        assert_eq!(encode("Pfeiffer").as_str(), "6000");
        // t,t,m,n: doubled t collapses, m and n collapse.
        assert_eq!(encode("Ottoman").as_str(), "4500");
    }

    #[test]
    fn test_first_letter_seeds_collapse_state() {
        // B and P share a class, so the P after the leading B is silent
        // even though no digit has been emitted yet.
        assert_eq!(encode("Bp").as_str(), "0000");
        assert_eq!(encode("Bpt").as_str(), "4000");
        // Repeated first letters collapse into the seed the same way.
        assert_eq!(encode("Aaron"), encode("Arron"));
        assert_eq!(encode("Aaron").as_str(), "6500");
    }

    #[test]
    fn test_truncates_at_four_digits() {
        // c,d,m,c,d,m,c,d alternate classes well past four digits.
        assert_eq!(encode("acadamacadamacadam").as_str(), "2452");
    }

    #[test]
    fn test_code_display_matches_as_str() {
        let code = encode("Smith");
        assert_eq!(code.to_string(), code.as_str());
    }
}
