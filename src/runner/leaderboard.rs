//! Leaderboard submission
//!
//! Submissions can fail for reasons unrelated to gameplay. The game queues
//! them and the driving loop delivers them between frames.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// A score waiting to be sent to a leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub leaderboard_id: String,
    pub score: f64,
}

/// Error type for a failed submission
#[derive(Debug)]
pub enum LeaderboardError {
    Io(io::Error),
    Rejected(String),
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Leaderboard I/O error: {e}"),
            Self::Rejected(reason) => write!(f, "Leaderboard rejected score: {reason}"),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Rejected(_) => None,
        }
    }
}

impl From<io::Error> for LeaderboardError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Destination for score submissions
pub trait Leaderboard {
    /// Submit `score` to the leaderboard `id`
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` if the submission was not recorded.
    fn submit(&mut self, id: &str, score: f64) -> Result<(), LeaderboardError>;
}

/// Appends submissions to a local journal file, one `id<TAB>score` per line
#[derive(Debug, Clone)]
pub struct JournalLeaderboard {
    path: PathBuf,
}

impl JournalLeaderboard {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Leaderboard for JournalLeaderboard {
    fn submit(&mut self, id: &str, score: f64) -> Result<(), LeaderboardError> {
        if !score.is_finite() || score < 0.0 {
            return Err(LeaderboardError::Rejected(format!("invalid score {score}")));
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{id}\t{score}")?;
        Ok(())
    }
}

/// Records submissions in the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLeaderboard;

impl Leaderboard for LogLeaderboard {
    fn submit(&mut self, id: &str, score: f64) -> Result<(), LeaderboardError> {
        info!(leaderboard = id, score, "score submitted");
        Ok(())
    }
}
