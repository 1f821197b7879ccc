//! Formatting utilities for terminal output

use crate::core::{Evaluation, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color one letter the way its verdict is shown on the board
#[must_use]
pub fn verdict_letter(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.verdicts())
        .map(|(letter, &verdict)| verdict_letter(letter, verdict).to_string())
        .collect()
}

/// Plain-text tile row: uppercase for Correct, lowercase for Present, `.` for Absent
#[must_use]
pub fn plain_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.verdicts())
        .map(|(letter, verdict)| match verdict {
            Verdict::Correct => letter.to_ascii_uppercase(),
            Verdict::Present => letter,
            Verdict::Absent => '.',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn plain_row_marks_verdicts() {
        let secret = word("allot");
        let guess = word("lolly");
        let evaluation = Evaluation::calculate(&guess, &secret);
        assert_eq!(plain_row(&guess, &evaluation), "loL..");
    }

    #[test]
    fn colored_row_keeps_every_letter() {
        colored::control::set_override(false);
        let secret = word("crane");
        let guess = word("eerie");
        let evaluation = Evaluation::calculate(&guess, &secret);
        assert_eq!(colored_row(&guess, &evaluation), " E  E  R  I  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_overflow() {
        assert_eq!(create_progress_bar(100.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 3), "░░░");
    }
}
