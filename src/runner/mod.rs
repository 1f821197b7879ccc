//! Endless runner score management
//!
//! Speed and score progression, high-score persistence and deferred
//! leaderboard submission. Rendering and collision live with the caller.

mod game;
mod leaderboard;
mod scores;

pub use game::{RunnerConfig, RunnerGame, format_score};
pub use leaderboard::{
    JournalLeaderboard, Leaderboard, LeaderboardError, LogLeaderboard, ScoreSubmission,
};
pub use scores::{FileScoreStore, MemoryScoreStore, ScoreStore};
