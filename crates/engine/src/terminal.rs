//! Terminal-state predicates. Pure reads over a board snapshot.

use tilt_core::Board;

use crate::config::RuleSet;

/// Largest piece value; reaching it ends the game.
pub const MAX_PIECE: i64 = 2048;

/// True iff at least one cell is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    !board.is_full()
}

/// True iff some tile holds exactly `value`.
pub fn tile_value_exists(board: &Board, value: i64) -> bool {
    board.tiles().any(|t| t.value() == value)
}

pub fn max_tile_exists(board: &Board) -> bool {
    tile_value_exists(board, MAX_PIECE)
}

/// True iff some tilt could change the board: an empty cell, or two
/// orthogonally adjacent tiles with the same value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    let size = board.size();
    for col in 0..size {
        for row in 0..size {
            let Some(tile) = board.get(col, row) else {
                return true;
            };
            let same = |c: usize, r: usize| board.get(c, r).is_some_and(|n| n.merges_with(&tile));
            if col + 1 < size && same(col + 1, row) {
                return true;
            }
            if row + 1 < size && same(col, row + 1) {
                return true;
            }
        }
    }
    false
}

/// Classic rules: won, or stuck.
pub fn game_over(board: &Board) -> bool {
    max_tile_exists(board) || !at_least_one_move_exists(board)
}

pub fn game_over_with(board: &Board, rules: &RuleSet) -> bool {
    tile_value_exists(board, rules.max_piece) || !at_least_one_move_exists(board)
}
