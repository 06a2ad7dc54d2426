//! Tile value object.

use serde::{Deserialize, Serialize};

/// A numbered tile sitting at a fixed cell, in true north-up coordinates.
///
/// Tiles never change after creation. Moving one yields a new tile at the
/// destination, merging two yields a new tile of double the value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: i64,
    col: usize,
    row: usize,
}

impl Tile {
    pub fn new(value: i64, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    #[inline(always)]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline(always)]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Same value, new cell.
    pub fn moved_to(self, col: usize, row: usize) -> Self {
        Self::new(self.value, col, row)
    }

    /// Equal values whose double still fits in an `i64`.
    pub fn merges_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value.checked_mul(2).is_some()
    }

    /// Doubled value at the given cell. Only valid when [`Tile::merges_with`] holds.
    pub fn merged_at(self, col: usize, row: usize) -> Self {
        Self::new(self.value * 2, col, row)
    }
}
