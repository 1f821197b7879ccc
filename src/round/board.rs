//! Tile grid presented to the player
//!
//! The round never draws anything. It reports letters and tile states
//! through [`TileView`]; [`Board`] is the in-memory grid the front ends read.

use crate::core::Verdict;

/// Display state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    Occupied,
    Judged(Verdict),
}

/// Row/column of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Receiver of per-tile updates
pub trait TileView {
    fn set_letter(&mut self, pos: TilePos, letter: Option<char>);
    fn set_state(&mut self, pos: TilePos, state: TileState);
}

/// A single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

/// Grid of `rows × cols` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![Tile::default(); rows * cols],
        }
    }

    /// Resize to `rows × cols` and empty every tile
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.tiles.clear();
        self.tiles.resize(rows * cols, Tile::default());
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Tiles of one row, empty if out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.tiles[start..start + self.cols]
    }

    /// Letters of one row as typed so far
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).iter().filter_map(|t| t.letter).collect()
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }
}

impl TileView for Board {
    fn set_letter(&mut self, pos: TilePos, letter: Option<char>) {
        if let Some(i) = self.index(pos) {
            self.tiles[i].letter = letter;
        }
    }

    fn set_state(&mut self, pos: TilePos, state: TileState) {
        if let Some(i) = self.index(pos) {
            self.tiles[i].state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 4);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 4);
        for row in 0..6 {
            assert_eq!(board.row(row).len(), 4);
            assert!(board.row(row).iter().all(|t| *t == Tile::default()));
        }
    }

    #[test]
    fn set_letter_and_state() {
        let mut board = Board::new(2, 5);
        let pos = TilePos::new(1, 3);
        board.set_letter(pos, Some('q'));
        board.set_state(pos, TileState::Judged(Verdict::Present));

        let tile = board.tile(pos).unwrap();
        assert_eq!(tile.letter, Some('q'));
        assert_eq!(tile.state, TileState::Judged(Verdict::Present));
        assert_eq!(board.row_text(1), "q");
    }

    #[test]
    fn out_of_range_updates_are_ignored() {
        let mut board = Board::new(2, 4);
        board.set_letter(TilePos::new(2, 0), Some('a'));
        board.set_state(TilePos::new(0, 4), TileState::Occupied);
        assert_eq!(board, Board::new(2, 4));
        assert!(board.tile(TilePos::new(5, 5)).is_none());
        assert!(board.row(9).is_empty());
    }

    #[test]
    fn reset_resizes_and_clears() {
        let mut board = Board::new(6, 4);
        board.set_letter(TilePos::new(0, 0), Some('a'));
        board.reset(6, 7);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.row(5).len(), 7);
        assert_eq!(board.tile(TilePos::new(0, 0)).unwrap().letter, None);
    }
}
