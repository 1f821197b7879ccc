//! Headless runner simulation
//!
//! Plays a few runner games on a fixed tick, ending each after a random
//! stretch of simulated time, and reports the scores.

use crate::runner::{Leaderboard, RunnerConfig, RunnerGame, ScoreStore};
use rand::Rng;
use tracing::{debug, warn};

/// Settings for a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub runs: usize,
    /// Longest simulated run in seconds
    pub seconds: f64,
    /// Frame length in milliseconds
    pub tick_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: 3,
            seconds: 30.0,
            tick_ms: 16,
        }
    }
}

/// Outcome of one simulated run
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub seconds: f64,
    pub ticks: usize,
    pub score: f64,
    /// Score as the game displays it
    pub score_text: String,
    pub final_speed: f64,
    pub new_high_score: bool,
}

/// Outcome of a whole simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub runs: Vec<RunResult>,
    pub high_score: f64,
    pub high_score_text: String,
    pub submitted: usize,
}

/// Parse a `--seconds` value, accepting only finite, non-negative numbers
///
/// # Errors
///
/// Returns a message if `value` is not a number, is negative, or is not finite.
pub fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("'{value}' must be a finite, non-negative number"))
    }
}

/// Simulate `config.runs` games against `store`, flushing submissions to
/// `leaderboard` after each run
///
/// Each run lasts between half and all of `config.seconds`. A negative or
/// non-finite length plays zero-length runs.
pub fn simulate<S, L, R>(
    config: &SimulationConfig,
    store: S,
    leaderboard: &mut L,
    rng: &mut R,
) -> SimulationSummary
where
    S: ScoreStore,
    L: Leaderboard + ?Sized,
    R: Rng,
{
    let dt = config.tick_ms.max(1) as f64 / 1000.0;
    let longest = if config.seconds.is_finite() {
        config.seconds
    } else {
        warn!(seconds = config.seconds, "run length is not finite");
        0.0
    };
    let mut game = RunnerGame::create(RunnerConfig::default(), store);
    let mut runs = Vec::with_capacity(config.runs);
    let mut submitted = 0;

    for run in 0..config.runs {
        if run > 0 {
            game.new_game();
        }
        let previous_best = game.high_score();
        let length = if longest > 0.0 {
            rng.random_range(longest / 2.0..=longest)
        } else {
            0.0
        };

        let mut elapsed = 0.0;
        let mut ticks = 0;
        while elapsed + dt <= length {
            game.update(dt);
            elapsed += dt;
            ticks += 1;
        }
        let final_speed = game.speed();
        game.game_over();
        debug!(run, ticks, score = game.score(), "simulated run finished");

        runs.push(RunResult {
            seconds: elapsed,
            ticks,
            score: game.score(),
            score_text: game.score_text(),
            final_speed,
            new_high_score: game.score() > previous_best,
        });
        submitted += game.flush_submissions(leaderboard);
    }

    let high_score = game.high_score();
    let high_score_text = game.high_score_text();
    game.destroy(leaderboard);

    SimulationSummary {
        runs,
        high_score,
        high_score_text,
        submitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{LeaderboardError, MemoryScoreStore, format_score};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct Counting(usize);

    impl Leaderboard for Counting {
        fn submit(&mut self, _id: &str, _score: f64) -> Result<(), LeaderboardError> {
            self.0 += 1;
            Ok(())
        }
    }

    #[test]
    fn runs_the_requested_number_of_games() {
        let config = SimulationConfig {
            runs: 4,
            seconds: 10.0,
            tick_ms: 20,
        };
        let mut board = Counting::default();
        let summary = simulate(
            &config,
            MemoryScoreStore::new(),
            &mut board,
            &mut StdRng::seed_from_u64(5),
        );

        assert_eq!(summary.runs.len(), 4);
        // Each run ends within one tick of a length drawn from 5..=10 seconds
        for run in &summary.runs {
            assert!(run.seconds > 4.9 && run.seconds <= 10.0 + 1e-9);
        }
        assert!(summary.runs[0].new_high_score);
        assert_eq!(summary.submitted, board.0);
        assert_eq!(
            summary.submitted,
            summary.runs.iter().filter(|r| r.new_high_score).count()
        );

        let best = summary.runs.iter().map(|r| r.score).fold(0.0, f64::max);
        assert!((summary.high_score - best).abs() < f64::EPSILON);
        assert_eq!(summary.high_score_text, format_score(best));
        assert_eq!(
            summary.runs[0].score_text,
            format_score(summary.runs[0].score)
        );
    }

    #[test]
    fn speed_grows_with_run_length() {
        let config = SimulationConfig {
            runs: 1,
            seconds: 20.0,
            tick_ms: 10,
        };
        let summary = simulate(
            &config,
            MemoryScoreStore::new(),
            &mut Counting::default(),
            &mut StdRng::seed_from_u64(1),
        );
        let run = &summary.runs[0];
        assert!((run.final_speed - (5.0 + 0.1 * run.seconds)).abs() < 1e-6);
        assert!(run.score > 5.0 * run.seconds);
    }

    #[test]
    fn zero_seconds_scores_nothing() {
        let config = SimulationConfig {
            runs: 2,
            seconds: 0.0,
            tick_ms: 16,
        };
        let summary = simulate(
            &config,
            MemoryScoreStore::new(),
            &mut Counting::default(),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(summary.runs.iter().all(|r| r.ticks == 0));
        assert_eq!(summary.submitted, 0);
    }
    #[test]
    fn non_finite_seconds_play_empty_runs() {
        for seconds in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let config = SimulationConfig {
                runs: 1,
                seconds,
                tick_ms: 16,
            };
            let summary = simulate(
                &config,
                MemoryScoreStore::new(),
                &mut Counting::default(),
                &mut StdRng::seed_from_u64(3),
            );
            assert_eq!(summary.runs[0].ticks, 0);
            assert!(summary.high_score.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn parse_seconds_rejects_non_finite() {
        assert_eq!(parse_seconds("12.5"), Ok(12.5));
        assert_eq!(parse_seconds("0"), Ok(0.0));
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("NaN").is_err());
        assert!(parse_seconds("-3").is_err());
        assert!(parse_seconds("soon").is_err());
    }
}
