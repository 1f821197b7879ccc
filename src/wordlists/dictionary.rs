//! Dictionaries per word length
//!
//! A [`Dictionary`] answers "is this an acceptable guess?" and picks random
//! secrets for one word length. A [`Lexicon`] groups the dictionaries for
//! every supported length.

use super::embedded;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{MAX_LEN, MIN_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of valid guesses and random secrets
pub trait WordSource {
    /// Whether `word` is an acceptable guess (case-insensitive, trimmed)
    fn is_valid(&self, word: &str) -> bool;

    /// Pick a random secret with `length` letters
    ///
    /// Returns `None` if no secrets of that length are available.
    fn pick_random<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word>;
}

/// Error type for building a lexicon
#[derive(Debug)]
pub enum LexiconError {
    Io { path: PathBuf, source: io::Error },
    MissingLength(usize),
    NoWordLists(PathBuf),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::MissingLength(length) => write!(f, "No {length}-letter secrets available"),
            Self::NoWordLists(dir) => write!(f, "No word lists found in {}", dir.display()),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Words of a single length
#[derive(Debug, Clone)]
pub struct Dictionary {
    length: usize,
    solutions: Vec<Word>,
    valid: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary for `length`
    ///
    /// Words of any other length are dropped. Every solution is also an
    /// accepted guess.
    #[must_use]
    pub fn new(
        length: usize,
        solutions: impl IntoIterator<Item = Word>,
        valid: impl IntoIterator<Item = Word>,
    ) -> Self {
        let solutions: Vec<Word> = solutions
            .into_iter()
            .filter(|w| w.len() == length)
            .collect();

        let mut valid: FxHashSet<String> = valid
            .into_iter()
            .filter(|w| w.len() == length)
            .map(|w| w.text().to_string())
            .collect();
        valid.extend(solutions.iter().map(|w| w.text().to_string()));

        Self {
            length,
            solutions,
            valid,
        }
    }

    /// Dictionary backed by the embedded word lists
    #[must_use]
    pub fn embedded(length: usize) -> Option<Self> {
        let solutions = embedded::solutions(length)?;
        let valid = embedded::valid(length)?;
        Some(Self::new(
            length,
            words_from_slice(solutions),
            words_from_slice(valid),
        ))
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Possible secrets
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Number of accepted guesses (solutions included)
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Accepted guesses in sorted order
    #[must_use]
    pub fn valid_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .valid
            .iter()
            .filter_map(|text| Word::new(text).ok())
            .collect();
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words
    }
}

impl WordSource for Dictionary {
    fn is_valid(&self, word: &str) -> bool {
        self.valid.contains(&word.trim().to_lowercase())
    }

    fn pick_random<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        if length != self.length {
            return None;
        }
        self.solutions.choose(rng)
    }
}

/// Dictionaries for every available word length
#[derive(Debug, Clone)]
pub struct Lexicon {
    dictionaries: Vec<Dictionary>,
}

impl Lexicon {
    /// Build a lexicon from dictionaries, ignoring ones without secrets
    #[must_use]
    pub fn new(dictionaries: impl IntoIterator<Item = Dictionary>) -> Self {
        let mut dictionaries: Vec<Dictionary> = dictionaries
            .into_iter()
            .filter(|d| !d.solutions.is_empty())
            .collect();
        dictionaries.sort_by_key(Dictionary::length);
        dictionaries.dedup_by_key(|d| d.length);
        Self { dictionaries }
    }

    /// Lexicon backed by the embedded word lists
    ///
    /// # Examples
    /// ```
    /// use minigames::wordlists::{Lexicon, WordSource};
    ///
    /// let lexicon = Lexicon::embedded();
    /// assert!(lexicon.is_valid("Crane "));
    /// assert!(!lexicon.is_valid("zzzzq"));
    /// assert_eq!(lexicon.lengths(), vec![4, 5, 6, 7]);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new((MIN_LEN..=MAX_LEN).filter_map(Dictionary::embedded))
    }

    /// Load `solutions_<N>.txt` and `valid_<N>.txt` from a directory
    ///
    /// Lengths without a solutions file are skipped; a missing valid file
    /// means only the solutions are accepted as guesses.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Io` if an existing file cannot be read and
    /// `LexiconError::NoWordLists` if no length has any secrets.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LexiconError> {
        let dir = dir.as_ref();
        let mut dictionaries = Vec::new();

        for length in MIN_LEN..=MAX_LEN {
            let solutions_path = dir.join(format!("solutions_{length}.txt"));
            if !solutions_path.is_file() {
                debug!(length, path = %solutions_path.display(), "no solutions list");
                continue;
            }
            let solutions = read_list(&solutions_path)?;

            let valid_path = dir.join(format!("valid_{length}.txt"));
            let valid = if valid_path.is_file() {
                read_list(&valid_path)?
            } else {
                Vec::new()
            };

            debug!(
                length,
                solutions = solutions.len(),
                valid = valid.len(),
                "loaded word lists"
            );
            dictionaries.push(Dictionary::new(length, solutions, valid));
        }

        let lexicon = Self::new(dictionaries);
        if lexicon.dictionaries.is_empty() {
            return Err(LexiconError::NoWordLists(dir.to_path_buf()));
        }
        Ok(lexicon)
    }

    /// Dictionary for a word length
    #[must_use]
    pub fn dictionary(&self, length: usize) -> Option<&Dictionary> {
        self.dictionaries.iter().find(|d| d.length == length)
    }

    /// Dictionary for a word length, or an error naming the missing length
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::MissingLength` if no secrets of that length exist.
    pub fn require(&self, length: usize) -> Result<&Dictionary, LexiconError> {
        self.dictionary(length)
            .ok_or(LexiconError::MissingLength(length))
    }

    /// Available word lengths in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.dictionaries.iter().map(Dictionary::length).collect()
    }
}

impl WordSource for Lexicon {
    fn is_valid(&self, word: &str) -> bool {
        let trimmed = word.trim();
        self.dictionary(trimmed.len())
            .is_some_and(|d| d.is_valid(trimmed))
    }

    fn pick_random<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.dictionary(length)?.pick_random(length, rng)
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, LexiconError> {
    load_from_file(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}
