//! Property-based tests for the phonetic encoder and matcher
//!
//! These exercise the contract over arbitrary inputs rather than pinned
//! examples: the encoder is total, codes are always four digits, and the
//! matcher's output is fully determined by code equality.

use libsoundex::prelude::*;
use proptest::prelude::*;

// Strategy for printable-ASCII inputs, including punctuation and digits
fn raw_input() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

// Strategy for name-shaped strings
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z' ]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: every code is exactly four characters over `0`-`6`
    #[test]
    fn prop_code_is_four_digits(s in raw_input()) {
        let code = encode(&s);
        prop_assert_eq!(code.as_str().len(), 4);
        prop_assert!(code.as_str().chars().all(|c| ('0'..='6').contains(&c)));
    }

    /// Property: once padding starts it runs to the end of the code
    #[test]
    fn prop_padding_is_a_suffix(s in raw_input()) {
        let code = encode(&s);
        if let Some(first_pad) = code.as_str().find('0') {
            prop_assert!(code.as_str()[first_pad..].chars().all(|c| c == '0'));
        }
    }

    /// Property: word case is not significant
    #[test]
    fn prop_case_is_not_significant(s in raw_input()) {
        prop_assert_eq!(encode(&s), encode(&s.to_ascii_uppercase()));
        prop_assert_eq!(encode(&s), encode(&s.to_ascii_lowercase()));
    }

    /// Property: non-alphabetic characters never affect the code
    #[test]
    fn prop_non_letters_are_ignored(s in raw_input()) {
        let letters: String = s.chars().filter(char::is_ascii_alphabetic).collect();
        prop_assert_eq!(encode(&s), encode(&letters));
    }

    /// Property: the encoder is a pure function
    #[test]
    fn prop_encoding_is_deterministic(s in raw_input()) {
        prop_assert_eq!(encode(&s), encode(&s));
    }

    /// Property: the matcher returns exactly the candidates whose code
    /// equals the query's, in candidate order
    #[test]
    fn prop_matches_are_the_code_equal_candidates(
        queries in prop::collection::vec(name_strategy(), 0..6),
        candidates in prop::collection::vec(name_strategy(), 0..12),
    ) {
        let results = match_queries(queries.clone(), &candidates);
        prop_assert_eq!(results.len(), queries.len());

        for (query, set) in queries.iter().zip(&results) {
            prop_assert_eq!(&set.query, query);
            prop_assert_eq!(set.code, encode(query));

            let expected: Vec<&String> = candidates
                .iter()
                .filter(|c| encode(c) == set.code)
                .collect();
            let actual: Vec<&String> = set.matches.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
