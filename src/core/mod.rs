//! Core domain types for word games
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and deterministic.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, Verdict};
pub use word::{MAX_LEN, MIN_LEN, Word, WordError};
