//! Tilt directions and the perspective transform they induce.

use serde::{Deserialize, Serialize};

/// One of the four board edges a tilt can push tiles toward.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// (col0, row0, dcol, drow) for the rotation that makes this side "north".
    #[inline(always)]
    const fn frame(self) -> (usize, usize, isize, isize) {
        match self {
            Self::North => (0, 0, 0, 1),
            Self::East => (0, 1, 1, 0),
            Self::South => (1, 1, 0, -1),
            Self::West => (1, 0, -1, 0),
        }
    }

    /// Map working coordinates seen from this side to true north-up coordinates.
    ///
    /// Under `Side::East`, increasing the working row walks east across the
    /// true board, so a sweep written "toward north" pushes tiles east.
    /// `Side::North` is the identity.
    #[inline]
    pub fn to_board(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        let (col0, row0, dcol, drow) = self.frame();
        let last = (size - 1) as isize;
        let (c, r) = (col as isize, row as isize);
        let true_col = col0 as isize * last + c * drow + r * dcol;
        let true_row = row0 as isize * last - c * dcol + r * drow;
        (true_col as usize, true_row as usize)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
