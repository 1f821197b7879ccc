//! Round state machine
//!
//! A round owns one secret and a cursor over a `rows × len(secret)` board.
//! It consumes input events in order:
//!
//! ```text
//! AwaitingInput --submit full row--> (evaluate) --all correct--> Won
//!                                               --rows used up--> Lost
//!                                               --otherwise-----> AwaitingInput (next row)
//! ```
//!
//! Evaluation runs synchronously inside the submit, so it is never a
//! resting phase.

use super::board::{TilePos, TileState, TileView};
use crate::core::{Evaluation, Word};
use crate::wordlists::WordSource;
use std::fmt;
use tracing::debug;

/// Discrete player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
}

/// Resting phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Won { attempts: usize },
    Lost,
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Event had no effect
    Ignored,
    /// A letter was written at `pos`
    Typed { pos: TilePos, letter: char },
    /// The tile at `pos` was cleared
    Erased { pos: TilePos },
    /// Submitted word is not in the dictionary; same row stays active
    InvalidWord { word: String },
    /// Guess evaluated, play continues on the next row
    Scored { row: usize, evaluation: Evaluation },
    /// Guess matched the secret
    Won {
        attempts: usize,
        evaluation: Evaluation,
    },
    /// Last row used without a match
    Lost { evaluation: Evaluation },
}

/// Misconfigured round setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    WidthMismatch { secret_len: usize, width: usize },
    NoRows,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthMismatch { secret_len, width } => write!(
                f,
                "Secret has {secret_len} letters but the board is {width} tiles wide"
            ),
            Self::NoRows => write!(f, "A round needs at least one row"),
        }
    }
}

impl std::error::Error for RoundError {}

/// One play-through from secret selection to win or loss
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    max_rows: usize,
    row: usize,
    input: String,
    history: Vec<(Word, Evaluation)>,
    phase: Phase,
    invalid_word: bool,
}

impl Round {
    /// Start a round on a board `width` tiles wide with `rows` rows
    ///
    /// # Errors
    ///
    /// Returns `RoundError::WidthMismatch` if the secret does not fit the
    /// board exactly and `RoundError::NoRows` if `rows` is zero.
    pub fn new(secret: Word, rows: usize, width: usize) -> Result<Self, RoundError> {
        if secret.len() != width {
            return Err(RoundError::WidthMismatch {
                secret_len: secret.len(),
                width,
            });
        }
        if rows == 0 {
            return Err(RoundError::NoRows);
        }

        debug!(length = secret.len(), rows, "round started");

        Ok(Self {
            secret,
            max_rows: rows,
            row: 0,
            input: String::with_capacity(width),
            history: Vec::with_capacity(rows),
            phase: Phase::AwaitingInput,
            invalid_word: false,
        })
    }

    /// Apply one input event
    ///
    /// `words` decides which submitted words are acceptable; `view` receives
    /// every tile change.
    ///
    /// # Examples
    /// ```
    /// use minigames::core::Word;
    /// use minigames::round::{Board, InputEvent, Phase, Round};
    /// use minigames::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let mut board = Board::new(6, 4);
    /// let mut round = Round::new(Word::new("lake").unwrap(), 6, 4).unwrap();
    ///
    /// for ch in "lake".chars() {
    ///     round.apply(InputEvent::Letter(ch), &lexicon, &mut board);
    /// }
    /// round.apply(InputEvent::Submit, &lexicon, &mut board);
    /// assert_eq!(round.phase(), Phase::Won { attempts: 1 });
    /// ```
    pub fn apply<S, V>(&mut self, event: InputEvent, words: &S, view: &mut V) -> RoundEvent
    where
        S: WordSource + ?Sized,
        V: TileView + ?Sized,
    {
        if self.phase != Phase::AwaitingInput {
            return RoundEvent::Ignored;
        }

        match event {
            InputEvent::Backspace => self.erase(view),
            InputEvent::Submit if self.row_is_full() => self.submit(words, view),
            InputEvent::Letter(ch) if !self.row_is_full() && ch.is_ascii_alphabetic() => {
                self.type_letter(ch.to_ascii_lowercase(), view)
            }
            InputEvent::Submit | InputEvent::Letter(_) => RoundEvent::Ignored,
        }
    }

    fn type_letter<V: TileView + ?Sized>(&mut self, letter: char, view: &mut V) -> RoundEvent {
        let pos = TilePos::new(self.row, self.input.len());
        self.input.push(letter);
        view.set_letter(pos, Some(letter));
        view.set_state(pos, TileState::Occupied);
        RoundEvent::Typed { pos, letter }
    }

    fn erase<V: TileView + ?Sized>(&mut self, view: &mut V) -> RoundEvent {
        self.invalid_word = false;
        if self.input.pop().is_none() {
            return RoundEvent::Ignored;
        }
        let pos = TilePos::new(self.row, self.input.len());
        view.set_letter(pos, None);
        view.set_state(pos, TileState::Empty);
        RoundEvent::Erased { pos }
    }

    fn submit<S, V>(&mut self, words: &S, view: &mut V) -> RoundEvent
    where
        S: WordSource + ?Sized,
        V: TileView + ?Sized,
    {
        let guess = match Word::new(&self.input) {
            Ok(word) if words.is_valid(word.text()) => word,
            _ => {
                self.invalid_word = true;
                debug!(word = %self.input, "rejected guess");
                return RoundEvent::InvalidWord {
                    word: self.input.clone(),
                };
            }
        };

        let evaluation = Evaluation::calculate(&guess, &self.secret);
        for (col, &verdict) in evaluation.verdicts().iter().enumerate() {
            view.set_state(TilePos::new(self.row, col), TileState::Judged(verdict));
        }

        let row = self.row;
        self.history.push((guess, evaluation.clone()));
        self.row += 1;
        self.input.clear();

        if evaluation.is_win() {
            let attempts = row + 1;
            self.phase = Phase::Won { attempts };
            debug!(attempts, "round won");
            return RoundEvent::Won {
                attempts,
                evaluation,
            };
        }

        if self.row >= self.max_rows {
            self.phase = Phase::Lost;
            debug!(secret = %self.secret, "round lost");
            return RoundEvent::Lost { evaluation };
        }

        RoundEvent::Scored { row, evaluation }
    }

    fn row_is_full(&self) -> bool {
        self.input.len() >= self.secret.len()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::AwaitingInput
    }

    /// Active row (equals `max_rows` once all rows are used)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of the next letter in the active row
    #[must_use]
    pub fn col(&self) -> usize {
        self.input.len()
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.secret.len()
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submitted guesses with their evaluations, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Evaluation)] {
        &self.history
    }

    /// Whether the last submit was rejected and not yet edited
    #[must_use]
    pub const fn invalid_word(&self) -> bool {
        self.invalid_word
    }

    #[must_use]
    pub fn rows_remaining(&self) -> usize {
        self.max_rows.saturating_sub(self.row)
    }
}
