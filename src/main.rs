//! Minigames - CLI
//!
//! Word game with TUI and CLI modes, plus evaluator and runner tooling.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use minigames::{
    commands::{SimulationConfig, check_guess, parse_seconds, run_audit, run_simple, simulate},
    core::{MAX_LEN, MIN_LEN},
    output::{print_audit_report, print_check_result, print_runner_summary},
    round::{DEFAULT_ROWS, Session, SessionConfig},
    runner::{FileScoreStore, JournalLeaderboard, Leaderboard, LogLeaderboard, MemoryScoreStore},
    wordlists::Lexicon,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minigames",
    about = "Guess the hidden word, level up from 4 to 7 letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word lists: 'embedded' (default) or a directory of solutions_N.txt / valid_N.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Word length to start at (audit: only this length)
    #[arg(
        short,
        long,
        global = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_LEN as u64..=MAX_LEN as u64)
    )]
    length: Option<usize>,

    /// Guesses per round
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ROWS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    rows: usize,

    /// Seed for secret selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Score one guess against a secret
    Check {
        /// The hidden word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Score every valid guess against every secret and check the invariants
    Audit {
        /// Limit number of secrets per length
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Simulate runner games and track the high score
    Runner {
        /// Number of runs
        #[arg(long, default_value_t = 3)]
        runs: usize,

        /// Longest run in simulated seconds
        #[arg(short, long, default_value_t = 30.0, value_parser = parse_seconds)]
        seconds: f64,

        /// Frame length in milliseconds
        #[arg(short, long, default_value_t = 16)]
        tick_ms: u64,

        /// High-score file (kept in memory when omitted)
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Append leaderboard submissions to this file (logged when omitted)
        #[arg(long)]
        journal: Option<PathBuf>,
    },
}

/// Load word lists based on the -w flag
fn load_lexicon(words: &str) -> Result<Lexicon> {
    if words == "embedded" {
        return Ok(Lexicon::embedded());
    }
    Lexicon::from_dir(words).with_context(|| format!("Failed to load word lists from {words}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play_command(&cli.words, session_config(cli.length, cli.rows), cli.seed)
        }
        Commands::Simple => {
            run_simple_command(&cli.words, session_config(cli.length, cli.rows), cli.seed)
        }
        Commands::Check { secret, guess } => run_check_command(&cli.words, &secret, &guess),
        Commands::Audit { limit } => run_audit_command(&cli.words, cli.length, limit),
        Commands::Runner {
            runs,
            seconds,
            tick_ms,
            scores,
            journal,
        } => {
            let config = SimulationConfig {
                runs,
                seconds,
                tick_ms,
            };
            run_runner_command(&config, scores, journal, cli.seed)
        }
    }
}

fn session_config(length: Option<usize>, rows: usize) -> SessionConfig {
    SessionConfig {
        start_length: length.unwrap_or(MIN_LEN),
        rows,
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(words: &str, config: SessionConfig, seed: Option<u64>) -> Result<()> {
    use minigames::interactive::{App, run_tui};

    let lexicon = load_lexicon(words)?;
    let session =
        Session::new(&lexicon, config, make_rng(seed)).context("Failed to start a round")?;
    run_tui(App::new(session))
}

fn run_simple_command(words: &str, config: SessionConfig, seed: Option<u64>) -> Result<()> {
    let lexicon = load_lexicon(words)?;
    let mut session =
        Session::new(&lexicon, config, make_rng(seed)).context("Failed to start a round")?;
    run_simple(&mut session)
}

fn run_check_command(words: &str, secret: &str, guess: &str) -> Result<()> {
    let lexicon = load_lexicon(words)?;
    let result = check_guess(secret, guess, &lexicon)?;
    print_check_result(&result);
    Ok(())
}

fn run_audit_command(words: &str, length: Option<usize>, limit: Option<usize>) -> Result<()> {
    let lexicon = load_lexicon(words)?;
    let lengths = match length {
        Some(length) => vec![length],
        None => lexicon.lengths(),
    };

    let mut failed = 0;
    for length in lengths {
        let dictionary = lexicon.require(length)?;
        println!("🎯 Auditing {length}-letter words...");
        let report = run_audit(dictionary, limit, true);
        print_audit_report(&report);
        if !report.passed() {
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} word length(s) failed the audit");
    }
    Ok(())
}

fn run_runner_command(
    config: &SimulationConfig,
    scores: Option<PathBuf>,
    journal: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut leaderboard: Box<dyn Leaderboard> = match journal {
        Some(path) => Box::new(JournalLeaderboard::new(path)),
        None => Box::new(LogLeaderboard),
    };

    let summary = match scores {
        Some(path) => {
            let store = FileScoreStore::open(&path)
                .with_context(|| format!("Failed to read high scores from {}", path.display()))?;
            debug!(path = %store.path().display(), "high scores loaded");
            simulate(config, store, leaderboard.as_mut(), &mut rng)
        }
        None => simulate(
            config,
            MemoryScoreStore::new(),
            leaderboard.as_mut(),
            &mut rng,
        ),
    };

    print_runner_summary(&summary);
    Ok(())
}
