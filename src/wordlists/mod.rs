//! Word lists for the word games
//!
//! Provides embedded word lists compiled into the binary, file loading, and
//! the per-length dictionaries built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, Lexicon, LexiconError, WordSource};
pub use embedded::{
    SOLUTIONS_4, SOLUTIONS_5, SOLUTIONS_6, SOLUTIONS_7, VALID_4, VALID_5, VALID_6, VALID_7,
    solutions, valid,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_length_has_lists() {
        for length in 4..=7 {
            assert!(!solutions(length).unwrap().is_empty());
            assert!(!valid(length).unwrap().is_empty());
        }
        assert!(solutions(3).is_none());
        assert!(valid(8).is_none());
    }

    #[test]
    fn embedded_words_are_lowercase_with_matching_length() {
        for length in 4..=7 {
            for &word in solutions(length).unwrap().iter().chain(valid(length).unwrap()) {
                assert_eq!(word.len(), length, "Word '{word}' is not {length} letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn solutions_subset_of_valid() {
        for length in 4..=7 {
            let valid_set: HashSet<_> = valid(length).unwrap().iter().collect();
            for answer in solutions(length).unwrap() {
                assert!(
                    valid_set.contains(answer),
                    "Solution '{answer}' not in valid list"
                );
            }
        }
    }

    #[test]
    fn lists_have_no_duplicates() {
        let unique: HashSet<_> = SOLUTIONS_5.iter().collect();
        assert_eq!(unique.len(), SOLUTIONS_5.len());
        let unique: HashSet<_> = VALID_7.iter().collect();
        assert_eq!(unique.len(), VALID_7.len());
    }

    #[test]
    fn named_constants_match_lookup() {
        assert_eq!(solutions(4), Some(SOLUTIONS_4));
        assert_eq!(solutions(6), Some(SOLUTIONS_6));
        assert_eq!(valid(5), Some(VALID_5));
        assert_eq!(valid(6), Some(VALID_6));
        assert_eq!(solutions(7), Some(SOLUTIONS_7));
        assert_eq!(valid(4), Some(VALID_4));
    }
}
