//! board representation - column-major arena of owned tile cells
//! perspective lives on a borrowed `View`, never on the board itself

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::view::View;
use crate::{BoardError, Side, Tile};

/// Square N×N 2048 board.
/// Cell (col, row) is at `cells[col * size + row]`.
/// Row 0 is the south edge, column 0 the west edge.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Build a board from a raw value matrix, top row first; 0 is an empty cell.
    ///
    /// `rows[r][c]` lands at `(c, size - 1 - r)`, so the literal reads the
    /// way the board is drawn.
    pub fn from_values<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (r, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    rows: size,
                    row: r,
                    len: values.len(),
                });
            }
            let row = size - 1 - r;
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.put(Tile::new(value, col, row));
                }
            }
        }
        Ok(board)
    }

    /// Raw value matrix, top row first. Inverse of [`Board::from_values`].
    pub fn to_values(&self) -> Vec<Vec<i64>> {
        (0..self.size)
            .rev()
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(col, row).map_or(0, |t| t.value()))
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at true coordinates, or `None` for an empty cell.
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, BoardError> {
        self.check(col, row)?;
        Ok(self.get(col, row))
    }

    /// Unchecked lookup for callers iterating `0..size()`.
    ///
    /// # Panics
    /// If `col` or `row` is outside the board.
    #[inline(always)]
    pub fn get(&self, col: usize, row: usize) -> Option<Tile> {
        assert!(col < self.size && row < self.size, "({col}, {row}) off board");
        self.cells[col * self.size + row]
    }

    /// Occupied cells, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Place a tile at its own position. The board is untouched on error.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        if self.tile(tile.col(), tile.row())?.is_some() {
            return Err(BoardError::Occupied {
                col: tile.col(),
                row: tile.row(),
            });
        }
        self.put(tile);
        Ok(())
    }

    /// Look at the board as if `side` were north.
    pub fn view(&mut self, side: Side) -> View<'_> {
        View::new(self, side)
    }

    #[inline]
    pub(crate) fn check(&self, col: usize, row: usize) -> Result<(), BoardError> {
        if col < self.size && row < self.size {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                col,
                row,
                size: self.size,
            })
        }
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, tile: Tile) {
        self.cells[tile.col() * self.size + tile.row()] = Some(tile);
    }

    #[inline(always)]
    pub(crate) fn remove(&mut self, col: usize, row: usize) {
        self.cells[col * self.size + row] = None;
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_values().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<i64>> = Vec::deserialize(deserializer)?;
        Board::from_values(&rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.get(col, row) {
                    Some(tile) => write!(f, "|{:4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
