//! Runner score and speed bookkeeping
//!
//! The runner gets faster the longer it runs and scores the distance
//! covered. The host loop calls [`RunnerGame::update`] once per frame.

use super::leaderboard::{Leaderboard, ScoreSubmission};
use super::scores::ScoreStore;
use tracing::{debug, warn};

/// Runner tuning and storage keys
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Speed at the start of every game
    pub initial_speed: f64,
    /// Speed gained per second of play
    pub speed_increase: f64,
    /// Score store slot for the high score
    pub high_score_slot: String,
    /// Leaderboard receiving new high scores
    pub leaderboard_id: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            initial_speed: 5.0,
            speed_increase: 0.1,
            high_score_slot: "hiscore".to_string(),
            leaderboard_id: "shs_dino".to_string(),
        }
    }
}

/// Score manager for one runner game instance
pub struct RunnerGame<S: ScoreStore> {
    config: RunnerConfig,
    store: S,
    score: f64,
    speed: f64,
    running: bool,
    high_score: f64,
    pending: Vec<ScoreSubmission>,
}

impl<S: ScoreStore> RunnerGame<S> {
    /// Create the manager and start the first game
    ///
    /// # Examples
    /// ```
    /// use minigames::runner::{MemoryScoreStore, RunnerConfig, RunnerGame};
    ///
    /// let mut game = RunnerGame::create(RunnerConfig::default(), MemoryScoreStore::new());
    /// game.update(1.0);
    /// assert!((game.speed() - 5.1).abs() < 1e-9);
    /// assert!((game.score() - 5.1).abs() < 1e-9);
    /// assert_eq!(game.score_text(), "00005");
    /// ```
    pub fn create(config: RunnerConfig, store: S) -> Self {
        let mut game = Self {
            speed: config.initial_speed,
            config,
            store,
            score: 0.0,
            running: false,
            high_score: 0.0,
            pending: Vec::new(),
        };
        game.new_game();
        game
    }

    /// Reset score and speed and start running
    pub fn new_game(&mut self) {
        self.score = 0.0;
        self.speed = self.config.initial_speed;
        self.running = true;
        self.sync_high_score();
        debug!(high_score = self.high_score, "runner game started");
    }

    /// Advance one frame of `dt` seconds
    ///
    /// Frames that are not a positive, finite length are skipped.
    pub fn update(&mut self, dt: f64) {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.speed += self.config.speed_increase * dt;
        self.score += self.speed * dt;
    }

    /// Stop the game and record a new high score if one was reached
    pub fn game_over(&mut self) {
        if !self.running {
            return;
        }
        self.speed = 0.0;
        self.running = false;
        self.sync_high_score();
        debug!(
            score = self.score,
            high_score = self.high_score,
            "runner game over"
        );
    }

    fn sync_high_score(&mut self) {
        let stored = self.store.high_score(&self.config.high_score_slot);
        self.high_score = stored;

        if self.score > stored {
            self.high_score = self.score;
            if let Err(e) = self
                .store
                .set_high_score(&self.config.high_score_slot, self.score)
            {
                warn!(slot = %self.config.high_score_slot, error = %e, "failed to save high score");
            }
            self.pending.push(ScoreSubmission {
                leaderboard_id: self.config.leaderboard_id.clone(),
                score: self.score,
            });
        }
    }

    /// Deliver queued submissions, returning how many were accepted
    ///
    /// Failures are logged and dropped; they never reach the game.
    pub fn flush_submissions<L: Leaderboard + ?Sized>(&mut self, leaderboard: &mut L) -> usize {
        let mut delivered = 0;
        for submission in self.pending.drain(..) {
            match leaderboard.submit(&submission.leaderboard_id, submission.score) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(
                    leaderboard = %submission.leaderboard_id,
                    score = submission.score,
                    error = %e,
                    "leaderboard submission failed"
                ),
            }
        }
        delivered
    }

    /// Flush outstanding submissions and hand back the score store
    pub fn destroy<L: Leaderboard + ?Sized>(mut self, leaderboard: &mut L) -> S {
        self.flush_submissions(leaderboard);
        self.store
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub const fn high_score(&self) -> f64 {
        self.high_score
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn pending_submissions(&self) -> &[ScoreSubmission] {
        &self.pending
    }

    /// Score as shown on screen, five zero-padded digits
    #[must_use]
    pub fn score_text(&self) -> String {
        format_score(self.score)
    }

    #[must_use]
    pub fn high_score_text(&self) -> String {
        format_score(self.high_score)
    }
}

/// Floor to a whole number and zero-pad to five digits
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{:05}", score.max(0.0).floor() as u64)
}
