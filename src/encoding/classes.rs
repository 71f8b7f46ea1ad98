//! Letter equivalence classes for the phonetic encoding.
//!
//! The encoding groups letters into six classes of phonetically
//! interchangeable sounds. Classification is a static per-letter lookup
//! rather than repeated membership scans, so the six classes are an
//! explicit, exhaustively-testable enumeration.

/// One of the six letter equivalence classes.
///
/// Each class carries the output digit it encodes to. Letters in the same
/// class are treated as interchangeable, and consecutive same-class letters
/// collapse to a single occurrence.
///
/// # Examples
///
/// ```rust
/// use libsoundex::encoding::SoundClass;
///
/// assert_eq!(SoundClass::of(b'm'), SoundClass::Nasal);
/// assert_eq!(SoundClass::of(b'N'), SoundClass::Nasal);
/// assert_eq!(SoundClass::Nasal.digit(), b'5');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SoundClass {
    /// A, E, I, O, U
    Vowel = b'1',
    /// C, G, J, K, Q, S, X, Y, Z
    Sibilant = b'2',
    /// B, F, P, V, W
    Labial = b'3',
    /// D, T
    Dental = b'4',
    /// M, N
    Nasal = b'5',
    /// Everything else (H, L, R)
    Other = b'6',
}

/// Class of each letter `a`..`z`, in order.
const CLASSES: [SoundClass; 26] = [
    SoundClass::Vowel,    // a
    SoundClass::Labial,   // b
    SoundClass::Sibilant, // c
    SoundClass::Dental,   // d
    SoundClass::Vowel,    // e
    SoundClass::Labial,   // f
    SoundClass::Sibilant, // g
    SoundClass::Other,    // h
    SoundClass::Vowel,    // i
    SoundClass::Sibilant, // j
    SoundClass::Sibilant, // k
    SoundClass::Other,    // l
    SoundClass::Nasal,    // m
    SoundClass::Nasal,    // n
    SoundClass::Vowel,    // o
    SoundClass::Labial,   // p
    SoundClass::Sibilant, // q
    SoundClass::Other,    // r
    SoundClass::Sibilant, // s
    SoundClass::Dental,   // t
    SoundClass::Vowel,    // u
    SoundClass::Labial,   // v
    SoundClass::Labial,   // w
    SoundClass::Sibilant, // x
    SoundClass::Sibilant, // y
    SoundClass::Sibilant, // z
];

impl SoundClass {
    /// Look up the class of an ASCII letter, case-insensitively.
    ///
    /// Non-letter bytes fall into [`SoundClass::Other`]; the encoder only
    /// ever passes letters here.
    #[inline]
    pub fn of(letter: u8) -> SoundClass {
        if letter.is_ascii_alphabetic() {
            CLASSES[(letter.to_ascii_lowercase() - b'a') as usize]
        } else {
            SoundClass::Other
        }
    }

    /// The output digit this class encodes to.
    #[inline]
    pub fn digit(self) -> u8 {
        self as u8
    }
}

/// Check if a letter is discarded after the first position.
///
/// After the first letter of a name, every occurrence of A, E, I, H, O, U,
/// W, Y is dropped before classification.
#[inline]
pub fn is_discarded(letter: u8) -> bool {
    matches!(
        letter.to_ascii_lowercase(),
        b'a' | b'e' | b'i' | b'h' | b'o' | b'u' | b'w' | b'y'
    )
}
