//! Perspective-scoped access to a board.
//!
//! A `View` re-indexes every lookup and move through [`Side::to_board`], so
//! one "toward north" sweep handles all four tilt directions. The view holds
//! the board's only mutable borrow; once it is dropped, callers see true
//! coordinates again.

use crate::{Board, BoardError, Side, Tile};

/// What a single move did to the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Destination was the tile's own cell.
    Stayed,
    /// Tile relocated into an empty cell.
    Slid,
    /// Tile merged with an equal neighbour; `value` is the new tile's value.
    Merged { value: i64 },
}

impl MoveOutcome {
    #[inline(always)]
    pub fn changed(self) -> bool {
        self != Self::Stayed
    }
}

pub struct View<'a> {
    board: &'a mut Board,
    side: Side,
}

impl<'a> View<'a> {
    pub(crate) fn new(board: &'a mut Board, side: Side) -> Self {
        Self { board, side }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline(always)]
    fn locate(&self, col: usize, row: usize) -> (usize, usize) {
        self.side.to_board(col, row, self.board.size())
    }

    /// Tile at working coordinates.
    pub fn tile_at(&self, col: usize, row: usize) -> Result<Option<Tile>, BoardError> {
        self.board.check(col, row)?;
        Ok(self.get(col, row))
    }

    /// Unchecked [`View::tile_at`].
    ///
    /// # Panics
    /// If `col` or `row` is outside the board.
    #[inline(always)]
    pub fn get(&self, col: usize, row: usize) -> Option<Tile> {
        let (c, r) = self.locate(col, row);
        self.board.get(c, r)
    }

    /// Move `tile` to working coordinates `(col, row)`, merging with an equal
    /// tile already there.
    ///
    /// Fails without touching the board if the destination is off the board,
    /// if `tile` is not actually on the board, or if the destination holds a
    /// tile of a different value.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> Result<MoveOutcome, BoardError> {
        self.board.check(col, row)?;
        if self.board.tile(tile.col(), tile.row())? != Some(tile) {
            return Err(BoardError::StaleTile {
                col: tile.col(),
                row: tile.row(),
            });
        }
        let (c, r) = self.locate(col, row);
        if let Some(dest) = self.board.get(c, r) {
            if dest != tile && !dest.merges_with(&tile) {
                return Err(BoardError::Occupied { col, row });
            }
        }
        Ok(self.place(tile, c, r))
    }

    /// Move whatever sits at working `from` to working `to`.
    /// Sweep fast path: `to` must be empty, hold an equal tile, or equal `from`.
    ///
    /// # Panics
    /// If either cell is outside the board.
    #[inline]
    pub fn shift(&mut self, from: (usize, usize), to: (usize, usize)) -> MoveOutcome {
        let (fc, fr) = self.locate(from.0, from.1);
        let Some(tile) = self.board.get(fc, fr) else {
            return MoveOutcome::Stayed;
        };
        let (tc, tr) = self.locate(to.0, to.1);
        self.place(tile, tc, tr)
    }

    fn place(&mut self, tile: Tile, col: usize, row: usize) -> MoveOutcome {
        if (tile.col(), tile.row()) == (col, row) {
            return MoveOutcome::Stayed;
        }
        let outcome = match self.board.get(col, row) {
            None => {
                self.board.put(tile.moved_to(col, row));
                MoveOutcome::Slid
            }
            Some(dest) => {
                debug_assert!(dest.merges_with(&tile), "merge of unmergeable tiles");
                let merged = dest.merged_at(col, row);
                self.board.put(merged);
                MoveOutcome::Merged {
                    value: merged.value(),
                }
            }
        };
        self.board.remove(tile.col(), tile.row());
        outcome
    }
}
