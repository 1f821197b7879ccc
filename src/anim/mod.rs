//! Frame-driven animation
//!
//! Animations are plain state advanced by the driving loop's time delta.

mod tween;

pub use tween::{Lerp, TILE_MOVE_SECONDS, Tween};
