//! Game state trait for board implementations.
//!
//! Boards implement `GameState` to expose exactly the capability surface the
//! searchers consume:
//! - Which moves are legal, in a stable order
//! - How a move produces a successor state (forecasting)
//! - Terminal win/loss tests
//!
//! The searchers never mutate a board. `forecast_move` returns a new,
//! independent state, so sibling branches of the search tree never share
//! mutable data.

use crate::core::{Move, MoveList, PlayerId};

/// Immutable game state consumed by the search engine.
///
/// ## Implementation Notes
///
/// - `get_legal_moves` must enumerate in a stable order for a given state:
///   all search routines break ties by keeping the first-encountered maximal
///   value, so enumeration order is part of the observable contract.
/// - `forecast_move` must not mutate the receiver; it returns the successor
///   state with the move applied and the active player switched.
/// - `is_winner` / `is_loser` are terminal tests for the isolation rule:
///   the active player loses when they have no legal move.
pub trait GameState: Clone {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// The opponent of a player.
    fn get_opponent(&self, player: PlayerId) -> PlayerId;

    /// Legal moves for a player, in stable enumeration order.
    ///
    /// Returns an empty list if the player cannot act.
    fn get_legal_moves(&self, player: PlayerId) -> MoveList;

    /// Legal moves for the active player.
    fn legal_moves(&self) -> MoveList {
        self.get_legal_moves(self.active_player())
    }

    /// Apply a move to a copy of this state and return the successor.
    ///
    /// The receiver is never mutated. The successor has the active player
    /// switched and its move count advanced.
    #[must_use]
    fn forecast_move(&self, mv: Move) -> Self;

    /// Check whether `player` has won (the opponent is blocked).
    fn is_winner(&self, player: PlayerId) -> bool;

    /// Check whether `player` has lost (it is their turn and they are blocked).
    fn is_loser(&self, player: PlayerId) -> bool;

    /// Current square of a player, or `None` before their opening move.
    fn get_player_location(&self, player: PlayerId) -> Option<(i32, i32)>;

    /// Board height in cells.
    fn height(&self) -> i32;

    /// Board width in cells.
    fn width(&self) -> i32;

    /// Number of moves applied since the initial position.
    fn move_count(&self) -> u32;
}
