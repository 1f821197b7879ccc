//! Exhaustive evaluator audit
//!
//! Scores every valid guess against every secret of a word length and checks
//! the evaluator's invariants on each pair.

use crate::core::{Evaluation, Verdict, Word};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// A pair whose evaluation broke an invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditViolation {
    pub secret: String,
    pub guess: String,
    pub evaluation: Evaluation,
    pub reason: &'static str,
}

/// Totals for one audited word length
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub length: usize,
    pub secrets: usize,
    pub guesses: usize,
    pub pairs: usize,
    pub correct: usize,
    pub present: usize,
    pub absent: usize,
    pub wins: usize,
    pub violations: Vec<AuditViolation>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Average number of Correct or Present verdicts per pair
    #[must_use]
    pub fn average_hits(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            (self.correct + self.present) as f64 / self.pairs as f64
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.correct += other.correct;
        self.present += other.present;
        self.absent += other.absent;
        self.wins += other.wins;
        self.violations.extend(other.violations);
        self
    }
}

/// Score one (secret, guess) pair and check it
///
/// Returns the evaluation together with the first broken invariant, if any.
/// Words of different lengths are not scored: the evaluation is empty and
/// the mismatch is reported as the violation.
#[must_use]
pub fn check_pair(secret: &Word, guess: &Word) -> (Evaluation, Option<&'static str>) {
    if secret.len() != guess.len() {
        return (Evaluation::default(), Some("word lengths differ"));
    }
    let evaluation = Evaluation::calculate(guess, secret);
    let violation = find_violation(secret, guess, &evaluation);
    (evaluation, violation)
}

fn find_violation(secret: &Word, guess: &Word, evaluation: &Evaluation) -> Option<&'static str> {
    if evaluation.len() != secret.len() {
        return Some("verdict count differs from word length");
    }

    if *evaluation != Evaluation::calculate(guess, secret) {
        return Some("evaluation is not repeatable");
    }

    if evaluation.is_win() != (guess == secret) {
        return Some("win flag disagrees with word equality");
    }

    let secret_counts = secret.letter_counts();
    let mut claimed: FxHashMap<u8, u8> = FxHashMap::default();
    for (&letter, verdict) in guess.letters().iter().zip(evaluation.verdicts()) {
        match verdict {
            Verdict::Correct | Verdict::Present => *claimed.entry(letter).or_insert(0) += 1,
            Verdict::Absent => {}
        }
    }
    if claimed
        .iter()
        .any(|(letter, &count)| count > secret_counts.get(letter).copied().unwrap_or(0))
    {
        return Some("letter claimed more often than the secret holds it");
    }

    for (i, verdict) in evaluation.verdicts().iter().enumerate() {
        let exact = guess.letter_at(i) == secret.letter_at(i);
        if exact != (*verdict == Verdict::Correct) {
            return Some("correct verdict disagrees with exact match");
        }
    }

    None
}

/// Audit one dictionary: its solutions as secrets, its valid words as guesses
///
/// `limit` caps the number of secrets. Pairs are scored in parallel.
#[must_use]
pub fn run_audit(dictionary: &Dictionary, limit: Option<usize>, progress: bool) -> AuditReport {
    let secrets: Vec<&Word> = dictionary
        .solutions()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    let guesses = dictionary.valid_words();

    debug!(
        length = dictionary.length(),
        secrets = secrets.len(),
        guesses = guesses.len(),
        "audit started"
    );

    let pb = if progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{}-letter secrets", dictionary.length()));

    let start = Instant::now();

    let totals = secrets
        .par_iter()
        .map(|&secret| {
            let mut report = AuditReport::default();
            for guess in &guesses {
                report.pairs += 1;
                let (evaluation, violation) = check_pair(secret, guess);
                if let Some(reason) = violation {
                    report.violations.push(AuditViolation {
                        secret: secret.text().to_string(),
                        guess: guess.text().to_string(),
                        evaluation,
                        reason,
                    });
                    continue;
                }
                report.correct += evaluation.count_correct();
                report.present += evaluation.count_present();
                report.absent +=
                    evaluation.len() - evaluation.count_correct() - evaluation.count_present();
                if evaluation.is_win() {
                    report.wins += 1;
                }
            }
            pb.inc(1);
            report
        })
        .reduce(AuditReport::default, AuditReport::merge);

    pb.finish_with_message("Complete!");

    AuditReport {
        length: dictionary.length(),
        secrets: secrets.len(),
        guesses: guesses.len(),
        duration: start.elapsed(),
        ..totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn known_pairs_pass() {
        for (secret, guess) in [
            ("allot", "lolly"),
            ("opens", "oxeot"),
            ("erase", "speed"),
            ("cabbage", "balance"),
            ("lake", "lake"),
        ] {
            let (_, violation) = check_pair(&word(secret), &word(guess));
            assert_eq!(violation, None, "{secret}/{guess}");
        }
    }

    #[test]
    fn length_mismatch_is_a_violation() {
        let (evaluation, violation) = check_pair(&word("lake"), &word("allot"));
        assert!(evaluation.is_empty());
        assert_eq!(violation, Some("word lengths differ"));
    }

    #[test]
    fn audit_counts_every_pair() {
        let dictionary = Dictionary::new(
            5,
            words_from_slice(&["allot", "crane"]),
            words_from_slice(&["lolly", "speed", "erase"]),
        );
        let report = run_audit(&dictionary, None, false);

        assert!(report.passed());
        assert_eq!(report.length, 5);
        assert_eq!(report.secrets, 2);
        // Solutions are valid guesses too
        assert_eq!(report.guesses, 5);
        assert_eq!(report.pairs, 10);
        assert_eq!(report.wins, 2);
        assert_eq!(report.correct + report.present + report.absent, 50);
    }

    #[test]
    fn limit_caps_secrets() {
        let dictionary = Dictionary::embedded(4).unwrap();
        let report = run_audit(&dictionary, Some(3), false);
        assert_eq!(report.secrets, 3);
        assert_eq!(report.pairs, 3 * dictionary.valid_count());
        assert!(report.passed());
    }

    #[test]
    fn empty_report_average() {
        assert!(AuditReport::default().average_hits().abs() < f64::EPSILON);
    }
}
