//! tilt-engine - 2048 tilt rules, terminal state and game model.
//!
//! Slides and merges tiles toward a side, scores merges and decides when a
//! game is over. Board storage and perspective live in `tilt-core`.

pub mod config;
pub mod model;
pub mod terminal;
pub mod tilt;

pub use config::RuleSet;
pub use model::Model;
pub use terminal::{
    at_least_one_move_exists, empty_space_exists, game_over, game_over_with, max_tile_exists,
    tile_value_exists, MAX_PIECE,
};
pub use tilt::{tilt, TiltOutcome};

pub use tilt_core::{Board, BoardError, MoveOutcome, Side, Tile};
