//! Tilt core crate - board, tiles and perspective for 2048.

mod board;
mod error;
mod side;
mod tile;
mod view;

pub use board::Board;
pub use error::BoardError;
pub use side::Side;
pub use tile::Tile;
pub use view::{MoveOutcome, View};
