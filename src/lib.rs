//! Minigames
//!
//! Casual terminal games built around a Wordle-style guess evaluator: a
//! round state machine with level progression from 4 to 7 letters, an
//! endless-runner score manager and frame-driven tweens.
//!
//! # Quick Start
//!
//! ```rust
//! use minigames::core::{Evaluation, Word};
//!
//! let secret = Word::new("allot").unwrap();
//! let guess = Word::new("lolly").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &secret);
//! assert_eq!(evaluation.to_string(), "🟨🟨🟩⬜⬜");
//! ```

// Core domain types
pub mod core;

// Word lists and dictionaries
pub mod wordlists;

// Round state machine and sessions
pub mod round;

// Frame-driven animation
pub mod anim;

// Runner score management
pub mod runner;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
