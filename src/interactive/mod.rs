//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, REVEAL_SECONDS_PER_TILE, Reveal, letter_hints, run_tui};
