//! Board contract violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is outside a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    #[error("cell ({col}, {row}) is already occupied")]
    Occupied { col: usize, row: usize },

    #[error("no such tile at ({col}, {row})")]
    StaleTile { col: usize, row: usize },

    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("row {row} has {len} values, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },
}
