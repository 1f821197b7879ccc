//! Guess evaluation
//!
//! Classifies every letter of a guess against the secret as
//! - Correct (right letter, right position)
//! - Present (letter occurs elsewhere in the secret)
//! - Absent (no unconsumed occurrence left in the secret)
//!
//! Each secret letter instance can satisfy at most one guess letter, so a
//! guess never gets more Correct+Present marks for a letter than the secret
//! contains.

use super::Word;
use std::fmt;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter in the right position (green)
    Correct,
    /// Letter appears elsewhere in the secret (yellow)
    Present,
    /// Letter does not appear, or all its instances are used up (gray)
    Absent,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single verdict character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The verdicts for one evaluated guess, in letter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Evaluation(Vec<Verdict>);

impl Evaluation {
    /// Evaluate `guess` against `secret`
    ///
    /// Callers must pass words of equal length; dictionary and length checks
    /// belong to the caller. In release builds a length mismatch evaluates
    /// only the common prefix.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret letters
    /// 2. Second pass, left to right: mark a letter Present while the secret
    ///    still has an unconsumed instance of it, consuming one; else Absent
    ///
    /// # Examples
    /// ```
    /// use minigames::core::Verdict::{Absent, Correct, Present};
    /// use minigames::core::{Evaluation, Word};
    ///
    /// let secret = Word::new("allot").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    ///
    /// assert_eq!(evaluation.verdicts(), &[Present, Present, Correct, Absent, Absent]);
    /// assert!(!evaluation.is_win());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must have the same length"
        );

        let len = guess.len().min(secret.len());
        let guess_letters = &guess.letters()[..len];
        let secret_letters = &secret.letters()[..len];

        let mut verdicts = vec![Verdict::Absent; len];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                verdicts[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: relocated letters from what is left
        for (verdict, letter) in verdicts.iter_mut().zip(guess_letters) {
            if *verdict == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// The verdicts in letter order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of evaluated positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A guess wins iff every verdict is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the Correct verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the Present verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }

    /// Parse an evaluation from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// # Examples
    /// ```
    /// use minigames::core::Evaluation;
    ///
    /// let e1 = Evaluation::parse("GY-G").unwrap();
    /// let e2 = Evaluation::parse("🟩🟨⬜🟩").unwrap();
    /// assert_eq!(e1, e2);
    /// assert_eq!(e1.to_emoji(), "🟩🟨⬜🟩");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts = s
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<Vec<_>>>()?;

        if verdicts.is_empty() {
            return None;
        }

        Some(Self(verdicts))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid evaluation string: {s}"))
    }
}
