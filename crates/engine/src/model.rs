//! Game state: one board, its score and whether the game is over.

use std::hash::{Hash, Hasher};

use tilt_core::{Board, BoardError, Side, Tile};
use tracing::{debug, info, instrument};

use crate::config::RuleSet;
use crate::terminal::game_over_with;
use crate::tilt::tilt;

#[derive(Clone, Debug)]
pub struct Model {
    board: Board,
    score: i64,
    /// High-water mark, only raised when the game is seen to be over.
    max_score: i64,
    game_over: bool,
    rules: RuleSet,
}

impl Model {
    /// Empty N×N game under classic rules.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_rules(RuleSet::with_size(size))
    }

    pub fn with_rules(rules: RuleSet) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(rules.size)?,
            score: 0,
            max_score: 0,
            game_over: false,
            rules,
        })
    }

    /// Restore a game from a raw value matrix (top row first, 0 = empty).
    pub fn from_values<R: AsRef<[i64]>>(
        rows: &[R],
        score: i64,
        max_score: i64,
        game_over: bool,
    ) -> Result<Self, BoardError> {
        let board = Board::from_values(rows)?;
        Ok(Self {
            rules: RuleSet::with_size(board.size()),
            board,
            score,
            max_score,
            game_over,
        })
    }

    /// Tile at true coordinates.
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, BoardError> {
        self.board.tile(col, row)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn max_score(&self) -> i64 {
        self.max_score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Re-check the board; once over, fold the score into `max_score`.
    pub fn game_over(&mut self) -> bool {
        self.check_game_over();
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
        self.game_over
    }

    /// Empty the board and reset the score. `max_score` survives.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
    }

    /// Place `tile` at its own position. The cell must be empty.
    #[instrument(skip(self))]
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        self.board.add_tile(tile)?;
        self.check_game_over();
        Ok(())
    }

    /// Tilt the board toward `side`. Returns true iff any tile moved.
    ///
    /// Equal tiles adjacent in the direction of motion merge into one of
    /// twice the value, which is added to the score. A merged tile does not
    /// merge again in the same tilt, and of three equal tiles in a row only
    /// the leading two merge.
    #[instrument(skip(self))]
    pub fn tilt(&mut self, side: Side) -> bool {
        let outcome = tilt(&mut self.board, side);
        self.score += outcome.score_delta;
        debug!(
            changed = outcome.changed,
            score_delta = outcome.score_delta,
            merges = outcome.merges,
            "tilted"
        );
        self.check_game_over();
        outcome.changed
    }

    fn check_game_over(&mut self) {
        let was_over = self.game_over;
        self.game_over = game_over_with(&self.board, &self.rules);
        if self.game_over && !was_over {
            info!(score = self.score, "game over");
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let over = game_over_with(&self.board, &self.rules);
        let max_score = if over {
            self.max_score.max(self.score)
        } else {
            self.max_score
        };
        write!(
            f,
            "\n[\n{}] {} (max: {}) (game is {}) \n",
            self.board,
            self.score,
            max_score,
            if over { "over" } else { "not over" }
        )
    }
}

// structural: two games are equal iff they render the same
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
