//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Embedded secret candidates for a word length
#[must_use]
pub fn solutions(length: usize) -> Option<&'static [&'static str]> {
    match length {
        4 => Some(SOLUTIONS_4),
        5 => Some(SOLUTIONS_5),
        6 => Some(SOLUTIONS_6),
        7 => Some(SOLUTIONS_7),
        _ => None,
    }
}

/// Embedded accepted guesses for a word length
#[must_use]
pub fn valid(length: usize) -> Option<&'static [&'static str]> {
    match length {
        4 => Some(VALID_4),
        5 => Some(VALID_5),
        6 => Some(VALID_6),
        7 => Some(VALID_7),
        _ => None,
    }
}
