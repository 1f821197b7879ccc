//! Simple interactive CLI mode
//!
//! Line-based word game without the TUI: one guess per line.

use crate::output::display::{print_round_history, print_statistics};
use crate::round::{InputEvent, RoundEvent, Session};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRound,
    Stats,
    Guess(String),
}

impl Command {
    /// Interpret one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewRound,
            ":s" | ":stats" => Self::Stats,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Type a whole word into the active round and submit it
///
/// Letters left over from an earlier rejected guess are erased first.
pub fn submit_word<R: Rng>(session: &mut Session<'_, R>, word: &str) -> RoundEvent {
    for _ in 0..session.round().col() {
        session.handle(InputEvent::Backspace);
    }
    for ch in word.trim().chars() {
        session.handle(InputEvent::Letter(ch));
    }
    session.handle(InputEvent::Submit)
}

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or a new round cannot be started.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Game - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden word. After each guess:");
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!(
        "  - {} letter elsewhere in the word",
        " Y ".black().on_yellow()
    );
    println!(
        "  - {} letter not in the word",
        " - ".white().on_bright_black()
    );
    println!("\nCommands: ':new' new round, ':stats' statistics, ':quit' to exit\n");

    announce_round(session);

    loop {
        let round = session.round();
        let prompt = format!("Guess {}/{}", round.row() + 1, round.max_rows());
        let Some(line) = read_line(&mut lines, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewRound => {
                session.play_again()?;
                println!("\n🔄 New round started!\n");
                announce_round(session);
            }
            Command::Stats => print_statistics(session.stats()),
            Command::Guess(word) => {
                let width = session.round().width();
                if word.len() != width || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("{}", format!("Enter a {width}-letter word").red());
                    continue;
                }

                match submit_word(session, &word) {
                    RoundEvent::InvalidWord { word } => {
                        let notice = format!("'{}' is not in the word list", word.to_uppercase());
                        println!("{}", notice.red());
                    }
                    RoundEvent::Scored { .. } => {
                        print_round_history(session.round());
                        let left = session.round().rows_remaining();
                        println!("{}", format!("{left} guesses left").bright_black());
                    }
                    RoundEvent::Won { attempts, .. } => {
                        print_round_history(session.round());
                        celebrate(attempts);
                        if !finish_round(session, &mut lines, true)? {
                            return Ok(());
                        }
                    }
                    RoundEvent::Lost { .. } => {
                        print_round_history(session.round());
                        let secret = session.round().secret().text().to_uppercase();
                        println!(
                            "\n{} The word was {}",
                            "❌ Out of guesses!".red().bold(),
                            secret.bright_yellow().bold()
                        );
                        if !finish_round(session, &mut lines, false)? {
                            return Ok(());
                        }
                    }
                    RoundEvent::Ignored | RoundEvent::Typed { .. } | RoundEvent::Erased { .. } => {}
                }
            }
        }
    }
}

fn announce_round<R: Rng>(session: &Session<'_, R>) {
    println!(
        "{} {}-letter word, {} guesses\n",
        "Level:".bright_cyan().bold(),
        session.level(),
        session.round().max_rows()
    );
}

fn celebrate(attempts: usize) {
    let message = match attempts {
        1 => "🏆 Hole in one!",
        2 => "⭐ Magnificent!",
        3 => "💫 Splendid!",
        4 => "✨ Great!",
        5 => "👍 Nice!",
        _ => "😅 Phew!",
    };
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} Solved in {} {}",
        message.bright_green().bold(),
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Ask what to do after a finished round; false means quit
fn finish_round<R: Rng, B: BufRead>(
    session: &mut Session<'_, R>,
    lines: &mut io::Lines<B>,
    won: bool,
) -> anyhow::Result<bool> {
    print_statistics(session.stats());

    let prompt = if session.level_up_available() {
        format!("Next level ({} letters)? (yes/no)", session.level() + 1)
    } else {
        "Play again? (yes/no)".to_string()
    };

    let answer = read_line(lines, &prompt)?.map(|l| l.to_lowercase());
    match answer.as_deref() {
        Some("yes" | "y") => {
            if won {
                session.next_level()?;
            } else {
                session.play_again()?;
            }
            println!();
            announce_round(session);
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}
