//! Level progression across rounds
//!
//! A session starts on short words and moves up one letter per won round
//! (when the player asks for the next level), up to the longest word list
//! the lexicon provides. It owns the board the front ends draw.

use super::board::Board;
use super::machine::{InputEvent, Round, RoundError, RoundEvent};
use crate::core::MIN_LEN;
use crate::wordlists::{Lexicon, LexiconError, WordSource};
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Rows per round when nothing else is configured
pub const DEFAULT_ROWS: usize = 6;

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Word length of the first level
    pub start_length: usize,
    /// Rows per round
    pub rows: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_length: MIN_LEN,
            rows: DEFAULT_ROWS,
        }
    }
}

/// Error starting a round
#[derive(Debug)]
pub enum SessionError {
    Lexicon(LexiconError),
    Round(RoundError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexicon(e) => write!(f, "{e}"),
            Self::Round(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexicon(e) => Some(e),
            Self::Round(e) => Some(e),
        }
    }
}

impl From<LexiconError> for SessionError {
    fn from(e: LexiconError) -> Self {
        Self::Lexicon(e)
    }
}

impl From<RoundError> for SessionError {
    fn from(e: RoundError) -> Self {
        Self::Round(e)
    }
}

/// Results across the rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts; index 0 is unused
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    pub fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if self.guess_distribution.len() <= attempts {
            self.guess_distribution.resize(attempts + 1, 0);
        }
        self.guess_distribution[attempts] += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins that took exactly `attempts` guesses
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> usize {
        self.guess_distribution.get(attempts).copied().unwrap_or(0)
    }
}

/// Rounds played back to back with level progression
pub struct Session<'a, R: Rng> {
    lexicon: &'a Lexicon,
    rng: R,
    config: SessionConfig,
    level: usize,
    level_up_pending: bool,
    round: Round,
    board: Board,
    stats: Statistics,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Create a session and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon has no secrets of
    /// `config.start_length` letters or `config.rows` is zero.
    ///
    /// # Examples
    /// ```
    /// use minigames::round::{Session, SessionConfig};
    /// use minigames::wordlists::Lexicon;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let rng = StdRng::seed_from_u64(1);
    /// let session = Session::new(&lexicon, SessionConfig::default(), rng).unwrap();
    /// assert_eq!(session.level(), 4);
    /// assert_eq!(session.board().cols(), 4);
    /// assert_eq!(session.round().secret().len(), 4);
    /// ```
    pub fn new(
        lexicon: &'a Lexicon,
        config: SessionConfig,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let level = config.start_length;
        let round = start_round(lexicon, level, config.rows, &mut rng)?;

        Ok(Self {
            lexicon,
            rng,
            config,
            level,
            level_up_pending: false,
            round,
            board: Board::new(config.rows, level),
            stats: Statistics::default(),
        })
    }

    /// Feed one input event to the active round
    pub fn handle(&mut self, event: InputEvent) -> RoundEvent {
        let outcome = self.round.apply(event, self.lexicon, &mut self.board);

        match &outcome {
            RoundEvent::Won { attempts, .. } => {
                self.stats.record_win(*attempts);
                self.level_up_pending = true;
            }
            RoundEvent::Lost { .. } => self.stats.record_loss(),
            _ => {}
        }

        outcome
    }

    /// Pick a new secret for the current level and reset the board to match
    ///
    /// An unfinished round is abandoned without touching the statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if no secret of the current length can be picked.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        self.round = start_round(self.lexicon, self.level, self.config.rows, &mut self.rng)?;
        self.board.reset(self.config.rows, self.level);
        Ok(())
    }

    /// Start another round at the same level, dropping any pending level-up
    ///
    /// # Errors
    ///
    /// Returns an error if no secret of the current length can be picked.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.level_up_pending = false;
        self.new_round()
    }

    /// Move to the next word length if the last round was won, then start a
    /// round
    ///
    /// Stays on the current length when already at the longest list.
    ///
    /// # Errors
    ///
    /// Returns an error if no secret of the new length can be picked.
    pub fn next_level(&mut self) -> Result<(), SessionError> {
        if self.level_up_pending && self.can_level_up() {
            self.level += 1;
            debug!(level = self.level, "level up");
        }
        self.level_up_pending = false;
        self.new_round()
    }

    /// Whether a won round unlocked a longer word length
    #[must_use]
    pub fn level_up_available(&self) -> bool {
        self.level_up_pending && self.can_level_up()
    }

    fn can_level_up(&self) -> bool {
        self.lexicon.dictionary(self.level + 1).is_some()
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}

fn start_round<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    length: usize,
    rows: usize,
    rng: &mut R,
) -> Result<Round, SessionError> {
    let secret = lexicon
        .pick_random(length, rng)
        .cloned()
        .ok_or(LexiconError::MissingLength(length))?;
    debug!(length, "secret picked");
    Ok(Round::new(secret, rows, length)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Phase;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Lexicon {
        Lexicon::new([
            Dictionary::new(4, words_from_slice(&["lake"]), words_from_slice(&["bond"])),
            Dictionary::new(
                5,
                words_from_slice(&["allot"]),
                words_from_slice(&["crane"]),
            ),
        ])
    }

    fn session(lexicon: &Lexicon, rows: usize) -> Session<'_, StdRng> {
        let config = SessionConfig {
            start_length: 4,
            rows,
        };
        Session::new(lexicon, config, StdRng::seed_from_u64(3)).unwrap()
    }

    fn submit(session: &mut Session<'_, StdRng>, word: &str) -> RoundEvent {
        for ch in word.chars() {
            session.handle(InputEvent::Letter(ch));
        }
        session.handle(InputEvent::Submit)
    }

    #[test]
    fn starts_at_configured_level() {
        let lexicon = lexicon();
        let session = session(&lexicon, 6);
        assert_eq!(session.level(), 4);
        assert_eq!(session.round().secret().text(), "lake");
        assert_eq!(session.board().rows(), 6);
        assert_eq!(session.board().cols(), 4);
    }

    #[test]
    fn missing_start_length_is_an_error() {
        let lexicon = lexicon();
        let config = SessionConfig {
            start_length: 7,
            rows: 6,
        };
        let result = Session::new(&lexicon, config, StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(SessionError::Lexicon(LexiconError::MissingLength(7)))
        ));
    }

    #[test]
    fn zero_rows_is_an_error() {
        let lexicon = lexicon();
        let config = SessionConfig {
            start_length: 4,
            rows: 0,
        };
        let result = Session::new(&lexicon, config, StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(SessionError::Round(RoundError::NoRows))));
    }

    #[test]
    fn win_records_stats_and_unlocks_next_level() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 6);

        submit(&mut session, "bond");
        let event = submit(&mut session, "lake");
        assert!(matches!(event, RoundEvent::Won { attempts: 2, .. }));
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().wins_in(2), 1);
        assert!(session.level_up_available());

        session.next_level().unwrap();
        assert_eq!(session.level(), 5);
        assert_eq!(session.board().cols(), 5);
        assert_eq!(session.round().secret().text(), "allot");
        assert_eq!(session.round().phase(), Phase::AwaitingInput);
        assert!(!session.level_up_available());
    }

    #[test]
    fn level_is_capped_at_longest_list() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 6);

        submit(&mut session, "lake");
        session.next_level().unwrap();
        submit(&mut session, "allot");
        assert!(!session.level_up_available());

        session.next_level().unwrap();
        assert_eq!(session.level(), 5);
    }

    #[test]
    fn next_level_without_win_keeps_length() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 1);

        submit(&mut session, "bond");
        assert_eq!(session.round().phase(), Phase::Lost);

        session.next_level().unwrap();
        assert_eq!(session.level(), 4);
    }

    #[test]
    fn loss_resets_streak() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 1);

        submit(&mut session, "lake");
        session.play_again().unwrap();
        submit(&mut session, "bond");

        let stats = session.stats();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn play_again_clears_board() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 6);

        submit(&mut session, "bond");
        assert_eq!(session.board().row_text(0), "bond");

        session.play_again().unwrap();
        assert_eq!(session.board().row_text(0), "");
        assert_eq!(session.round().row(), 0);
        assert_eq!(session.stats().total_games, 0);
    }

    #[test]
    fn play_again_after_win_stays_on_level() {
        let lexicon = lexicon();
        let mut session = session(&lexicon, 6);

        submit(&mut session, "lake");
        assert!(session.level_up_available());
        session.play_again().unwrap();
        assert!(!session.level_up_available());
        assert_eq!(session.level(), 4);

        session.next_level().unwrap();
        assert_eq!(session.level(), 4);
    }

    #[test]
    fn statistics_default_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
        assert_eq!(Statistics::default().wins_in(3), 0);
    }
}
