//! Player identification for two-player games.
//!
//! The engine is strictly two-player zero-sum: every search maximizes the
//! score of one fixed player and minimizes it for the other. Boards map a
//! `PlayerId` to its opponent via `GameState::get_opponent`.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player to move in a fresh game
/// is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of a two-player game.
    ///
    /// Boards with their own player bookkeeping should prefer
    /// `GameState::get_opponent`; this is the plain two-player flip.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
