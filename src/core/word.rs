//! Word representation
//!
//! A Word stores a lowercase ASCII word of 4 to 7 letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest supported word length
pub const MIN_LEN: usize = 4;

/// Longest supported word length
pub const MAX_LEN: usize = 7;

/// A validated lowercase word of `MIN_LEN..=MAX_LEN` letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be {MIN_LEN} to {MAX_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside `MIN_LEN..=MAX_LEN`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use minigames::core::Word;
    ///
    /// let word = Word::new(" Allot ").unwrap();
    /// assert_eq!(word.text(), "allot");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("cat").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_LEN..=MAX_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to track unconsumed secret letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid_lengths() {
        for text in ["lake", "allot", "orange", "balance"] {
            let word = Word::new(text).unwrap();
            assert_eq!(word.text(), text);
            assert_eq!(word.len(), text.len());
        }
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("  CrAnE\n").unwrap().text(), "crane");
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("cat"), Err(WordError::InvalidLength(3))));
        assert!(matches!(
            Word::new("absolute"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_access() {
        let word = Word::new("allot").unwrap();
        assert_eq!(word.letters(), b"allot");
        assert_eq!(word.letter_at(0), b'a');
        assert_eq!(word.letter_at(4), b't');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("allot").unwrap().letter_counts();
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'o'), Some(&1));
        assert_eq!(counts.get(&b't'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Lake".parse().unwrap();
        assert_eq!(format!("{word}"), "lake");
    }
}
