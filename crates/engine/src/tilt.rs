//! Tilt sweep - slide and merge every column toward one side.
//!
//! The board is viewed so the requested side is north; each column is then
//! swept from one below the top edge down to row 0. Every tile looks upward
//! for its landing cell, stopping at the settled boundary left by the last
//! merge in that column, so a merged tile never merges again this tilt.

use tilt_core::{Board, MoveOutcome, Side, Tile, View};

/// Result of tilting a board once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TiltOutcome {
    /// At least one tile changed cell.
    pub changed: bool,
    /// Sum of the values of all tiles produced by merges.
    pub score_delta: i64,
    /// Number of merges performed.
    pub merges: u32,
}

/// Where a tile ends up within its column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Landing {
    Slide(usize),
    Merge(usize),
}

/// Tilt `board` toward `side` in place.
pub fn tilt(board: &mut Board, side: Side) -> TiltOutcome {
    let mut view = board.view(side);
    let mut outcome = TiltOutcome::default();
    for col in 0..view.size() {
        sweep_column(&mut view, col, &mut outcome);
    }
    outcome
}

fn sweep_column(view: &mut View<'_>, col: usize, outcome: &mut TiltOutcome) {
    let size = view.size();
    // rows at or above `bottom` are settled
    let mut bottom = size;

    for row in (0..size - 1).rev() {
        let Some(tile) = view.get(col, row) else {
            continue;
        };
        match landing(view, col, row, bottom, &tile) {
            Some(Landing::Slide(dest)) => {
                if view.shift((col, row), (col, dest)).changed() {
                    outcome.changed = true;
                }
            }
            Some(Landing::Merge(dest)) => {
                if let MoveOutcome::Merged { value } = view.shift((col, row), (col, dest)) {
                    outcome.score_delta += value;
                    outcome.merges += 1;
                    outcome.changed = true;
                }
                bottom = dest;
            }
            None => {}
        }
    }
}

/// Nearest resting cell above `row`, below `bottom`.
fn landing(view: &View<'_>, col: usize, row: usize, bottom: usize, tile: &Tile) -> Option<Landing> {
    for record in row + 1..bottom {
        match view.get(col, record) {
            Some(other) if other.merges_with(tile) => return Some(Landing::Merge(record)),
            Some(_) => return Some(Landing::Slide(record - 1)),
            None if record == bottom - 1 => return Some(Landing::Slide(record)),
            None => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(board: &Board) -> Vec<Vec<i64>> {
        board.to_values()
    }

    #[test]
    fn test_slide_to_edge() {
        let mut b = Board::from_values(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::North);
        assert!(out.changed);
        assert_eq!(out.score_delta, 0);
        assert_eq!(values(&b)[0], vec![2, 0, 0, 0]);
    }

    #[test]
    fn test_simple_merge() {
        let mut b = Board::from_values(&[[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::North);
        assert_eq!(out.score_delta, 4);
        assert_eq!(out.merges, 1);
        assert_eq!(b.tile(0, 3).unwrap().map(|t| t.value()), Some(4));
        assert_eq!(b.tiles().count(), 1);
    }

    #[test]
    fn test_three_in_a_row_leading_pair() {
        let mut b = Board::from_values(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::North);
        assert_eq!(out.merges, 1);
        assert_eq!(out.score_delta, 4);
        assert_eq!(
            values(&b),
            vec![vec![4, 0, 0, 0], vec![2, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 4 above 2 2: the 2s become 4 but must not join the existing 4
        let mut b = Board::from_values(&[[4, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::North);
        assert_eq!(out.merges, 1);
        assert_eq!(
            values(&b),
            vec![vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_four_equal_make_two_pairs() {
        let mut b = Board::from_values(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::North);
        assert_eq!(out.merges, 2);
        assert_eq!(out.score_delta, 8);
        assert_eq!(values(&b)[0][0], 4);
        assert_eq!(values(&b)[1][0], 4);
        assert_eq!(b.tiles().count(), 2);
    }

    #[test]
    fn test_no_change_when_packed() {
        let mut b = Board::from_values(&[[2, 4, 0, 0], [4, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let before = b.clone();
        let out = tilt(&mut b, Side::North);
        assert!(!out.changed);
        assert_eq!(b, before);
    }

    #[test]
    fn test_tilt_each_side() {
        let start = [[0, 0, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        let expect = [
            (Side::North, (1, 3)),
            (Side::East, (3, 2)),
            (Side::South, (1, 0)),
            (Side::West, (0, 2)),
        ];
        for (side, (col, row)) in expect {
            let mut b = Board::from_values(&start).unwrap();
            assert!(tilt(&mut b, side).changed);
            assert_eq!(b.tile(col, row).unwrap().map(|t| t.value()), Some(2), "{side}");
        }
    }

    #[test]
    fn test_east_merge_along_row() {
        let mut b = Board::from_values(&[[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let out = tilt(&mut b, Side::East);
        assert_eq!(out.score_delta, 4);
        assert_eq!(values(&b)[0], vec![0, 0, 4, 4]);
    }

    #[test]
    fn test_west_three_in_a_row() {
        let mut b = Board::from_values(&[[0, 8, 8, 8], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        tilt(&mut b, Side::West);
        assert_eq!(values(&b)[0], vec![16, 8, 0, 0]);
    }

    #[test]
    fn test_size_one_never_changes() {
        let mut b = Board::from_values(&[[2]]).unwrap();
        for side in Side::ALL {
            assert_eq!(tilt(&mut b, side), TiltOutcome::default());
        }
    }
}
