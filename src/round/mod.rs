//! Word-guessing rounds
//!
//! The round state machine, the tile board it reports to, and the session
//! that chains rounds into levels.

mod board;
mod machine;
mod session;

pub use board::{Board, Tile, TilePos, TileState, TileView};
pub use machine::{InputEvent, Phase, Round, RoundError, RoundEvent};
pub use session::{DEFAULT_ROWS, Session, SessionConfig, SessionError, Statistics};
