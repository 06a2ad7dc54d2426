use serde::{Deserialize, Serialize};

use crate::terminal::MAX_PIECE;

/// Board size and winning tile for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub size: usize,
    pub max_piece: i64,
}

impl RuleSet {
    /// 4x4 board, game ends on 2048.
    pub fn classic() -> Self {
        Self {
            size: 4,
            max_piece: MAX_PIECE,
        }
    }

    /// Classic rules on an N×N board.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::classic()
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        let rules = RuleSet::classic();
        assert_eq!(rules.size, 4);
        assert_eq!(rules.max_piece, 2048);
    }

    #[test]
    fn test_with_size_keeps_max_piece() {
        let rules = RuleSet::with_size(6);
        assert_eq!(rules.size, 6);
        assert_eq!(rules.max_piece, RuleSet::classic().max_piece);
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(RuleSet::default(), RuleSet::classic());
    }
}
