//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, plain_row};
use crate::commands::{AuditReport, CheckResult, SimulationSummary};
use crate::round::{Round, Statistics};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}  {}",
        colored_row(&result.guess, &result.evaluation),
        result.evaluation.to_emoji(),
        plain_row(&result.guess, &result.evaluation).bright_black()
    );
    println!(
        "\n  Correct: {}  Present: {}",
        result.evaluation.count_correct().to_string().green(),
        result.evaluation.count_present().to_string().yellow()
    );

    if !result.in_dictionary {
        println!(
            "  {}",
            format!(
                "Note: '{}' is not in the word list; a round would reject it",
                result.guess
            )
            .bright_black()
        );
    }

    println!();
    if result.evaluation.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print every scored row of a round
pub fn print_round_history(round: &Round) {
    println!();
    for (i, (guess, evaluation)) in round.history().iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(guess, evaluation),
            evaluation.to_emoji()
        );
    }
    println!();
}

/// Print session statistics with a guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {attempts}: {} {count:4}", bar.green());
    }
}

/// Print an audit report
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}-letter words ",
        "EVALUATOR AUDIT:".bright_cyan().bold(),
        report.length
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Secrets:          {}", report.secrets);
    println!("   Guesses:          {}", report.guesses);
    println!("   Pairs scored:     {}", report.pairs);
    println!("   Wins:             {}", report.wins);
    println!(
        "   Verdicts:         {} correct, {} present, {} absent",
        report.correct.to_string().green(),
        report.present.to_string().yellow(),
        report.absent.to_string().bright_black()
    );
    println!("   Avg hits/guess:   {:.3}", report.average_hits());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!();
    if report.passed() {
        println!("{}", "✅ All invariants hold".green().bold());
        return;
    }

    println!(
        "{}",
        format!("❌ {} violations", report.violations.len())
            .red()
            .bold()
    );
    for violation in report.violations.iter().take(10) {
        println!(
            "   {} / {} {} {}",
            violation.secret.to_uppercase(),
            violation.guess.to_uppercase(),
            violation.evaluation.to_emoji(),
            violation.reason.bright_black()
        );
    }
}

/// Print the outcome of a runner simulation
pub fn print_runner_summary(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RUNNER SIMULATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, run) in summary.runs.iter().enumerate() {
        let score = if run.new_high_score {
            run.score_text.bright_yellow().bold()
        } else {
            run.score_text.normal()
        };
        println!(
            "   Run {}: {score}  {:6.1}s  speed {:5.2}{}",
            i + 1,
            run.seconds,
            run.final_speed,
            if run.new_high_score { "  ★ new best" } else { "" }
        );
    }

    println!(
        "\n   High score:       {}",
        summary.high_score_text.bright_yellow().bold()
    );
    println!("   Submissions:      {}", summary.submitted);
}
