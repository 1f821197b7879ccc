//! High-score persistence keyed by slot name

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage for the best score per named slot
pub trait ScoreStore {
    /// Stored high score, 0 when the slot was never written
    fn high_score(&self, slot: &str) -> f64;

    /// Replace the stored high score of `slot`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the store cannot persist the value.
    fn set_high_score(&mut self, slot: &str, score: f64) -> io::Result<()>;
}

/// Scores kept only for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    scores: FxHashMap<String, f64>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn high_score(&self, slot: &str) -> f64 {
        self.scores.get(slot).copied().unwrap_or(0.0)
    }

    fn set_high_score(&mut self, slot: &str, score: f64) -> io::Result<()> {
        self.scores.insert(slot.to_string(), score);
        Ok(())
    }
}

/// Scores saved to a text file of `slot=score` lines
///
/// The whole file is rewritten on every update.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
    scores: BTreeMap<String, f64>,
}

impl FileScoreStore {
    /// Open a score file; a missing file starts empty
    ///
    /// Malformed lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };

        let mut scores = BTreeMap::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((slot, score)) => {
                    scores.insert(slot.to_string(), score);
                }
                None => warn!(
                    path = %path.display(),
                    line = number + 1,
                    "skipping malformed score line"
                ),
            }
        }

        Ok(Self { path, scores })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> io::Result<()> {
        let mut content = String::new();
        for (slot, score) in &self.scores {
            content.push_str(slot);
            content.push('=');
            content.push_str(&score.to_string());
            content.push('\n');
        }
        fs::write(&self.path, content)
    }
}

impl ScoreStore for FileScoreStore {
    fn high_score(&self, slot: &str) -> f64 {
        self.scores.get(slot).copied().unwrap_or(0.0)
    }

    fn set_high_score(&mut self, slot: &str, score: f64) -> io::Result<()> {
        self.scores.insert(slot.to_string(), score);
        self.save()
    }
}

fn parse_line(line: &str) -> Option<(&str, f64)> {
    let (slot, score) = line.split_once('=')?;
    let slot = slot.trim();
    if slot.is_empty() {
        return None;
    }
    let score: f64 = score.trim().parse().ok()?;
    score.is_finite().then_some((slot, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("minigames-{name}-{}.txt", std::process::id()))
    }

    #[test]
    fn memory_store_defaults_to_zero() {
        let mut store = MemoryScoreStore::new();
        assert!(store.high_score("hiscore").abs() < f64::EPSILON);
        store.set_high_score("hiscore", 12.5).unwrap();
        assert!((store.high_score("hiscore") - 12.5).abs() < f64::EPSILON);
        assert!(store.high_score("other").abs() < f64::EPSILON);
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let path = temp_path("scores-roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = FileScoreStore::open(&path).unwrap();
        assert!(store.high_score("hiscore").abs() < f64::EPSILON);
        store.set_high_score("hiscore", 321.75).unwrap();
        store.set_high_score("bonus", 4.0).unwrap();

        let reopened = FileScoreStore::open(&path).unwrap();
        assert!((reopened.high_score("hiscore") - 321.75).abs() < f64::EPSILON);
        assert!((reopened.high_score("bonus") - 4.0).abs() < f64::EPSILON);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_store_skips_malformed_lines() {
        let path = temp_path("scores-malformed");
        fs::write(&path, "hiscore=10\nnot a score\n=5\nbest=abc\nrun = 7.5 \n").unwrap();

        let store = FileScoreStore::open(&path).unwrap();
        assert!((store.high_score("hiscore") - 10.0).abs() < f64::EPSILON);
        assert!((store.high_score("run") - 7.5).abs() < f64::EPSILON);
        assert!(store.high_score("best").abs() < f64::EPSILON);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn parse_line_rejects_non_finite() {
        assert_eq!(parse_line("a=1"), Some(("a", 1.0)));
        assert_eq!(parse_line("a=inf"), None);
        assert_eq!(parse_line("a=NaN"), None);
        assert_eq!(parse_line("a"), None);
    }
}
