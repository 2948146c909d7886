//! Board moves and the "no move" sentinel.
//!
//! A move is a destination square as `(row, col)` coordinates. The reserved
//! sentinel `Move::NONE` stands for "no legal move available" and is what a
//! searcher returns when the side to move is completely blocked; it is data,
//! not an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A board move: the destination square as `(row, col)`.
///
/// `Move::NONE` (`(-1, -1)`) is the reserved sentinel for "no legal move".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel value denoting that no legal move is available.
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a new move.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether this is the "no legal move" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == -1 && self.col == -1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "(none)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Ordered list of legal moves.
///
/// Inline capacity of 8 covers the knight-move case without allocating;
/// opening positions with more candidates spill to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(Move::NONE.is_none());
        assert!(!Move::new(0, 0).is_none());
        assert_eq!(format!("{}", Move::NONE), "(none)");
        assert_eq!(format!("{}", Move::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn test_move_equality() {
        assert_eq!(Move::new(1, 2), Move::new(1, 2));
        assert_ne!(Move::new(1, 2), Move::new(2, 1));
    }

    #[test]
    fn test_move_list_inline() {
        let mut moves = MoveList::new();
        for i in 0..8 {
            moves.push(Move::new(i, i));
        }
        assert!(!moves.spilled());
        moves.push(Move::new(8, 8));
        assert!(moves.spilled());
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(3, 4);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
