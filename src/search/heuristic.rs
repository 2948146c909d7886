//! Heuristic position evaluators.
//!
//! Evaluators are trait-based so strategies can be swapped without touching
//! searcher code. Every evaluator scores a state from the point of view of
//! one player and is pure: no side effects, no state.
//!
//! All strategies share the same terminal convention: a player with no
//! continuation who has thereby lost scores `f64::NEG_INFINITY`, a player
//! whose opponent is blocked scores `f64::INFINITY`. Everything in between
//! is heuristic and only comparable within one search call.

use crate::board::GameState;
use crate::core::PlayerId;

/// Policy for scoring a position from one player's perspective.
pub trait Evaluator<S: GameState>: Send + Sync {
    /// Heuristic value of `state` for `player`.
    fn score(&self, state: &S, player: PlayerId) -> f64;
}

// =============================================================================
// Feature helpers
// =============================================================================

/// Manhattan distance between the two players.
///
/// Zero if either player has not been placed yet.
pub fn distance_between_players<S: GameState>(state: &S, player: PlayerId) -> f64 {
    let opponent = state.get_opponent(player);
    match (
        state.get_player_location(player),
        state.get_player_location(opponent),
    ) {
        (Some((r1, c1)), Some((r2, c2))) => ((r1 - r2).abs() + (c1 - c2).abs()) as f64,
        _ => 0.0,
    }
}

/// Manhattan distance of a player from the board center.
///
/// Zero if the player has not been placed yet.
pub fn distance_from_center<S: GameState>(state: &S, player: PlayerId) -> f64 {
    match state.get_player_location(player) {
        Some((row, col)) => {
            let vertical = (state.height() as f64 / 2.0 - row as f64).abs();
            let horizontal = (state.width() as f64 / 2.0 - col as f64).abs();
            vertical + horizontal
        }
        None => 0.0,
    }
}

/// Difference between a player's legal-move count and the opponent's.
pub fn mobility_difference<S: GameState>(state: &S, player: PlayerId) -> f64 {
    let own = state.get_legal_moves(player).len() as f64;
    let opp = state.get_legal_moves(state.get_opponent(player)).len() as f64;
    own - opp
}

/// Terminal check shared by every evaluator.
///
/// Returns the extreme score if the position is already decided for
/// `player`, `None` otherwise.
fn terminal_score<S: GameState>(state: &S, player: PlayerId) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Aggressive mobility: own moves minus twice the opponent's.
///
/// Weighting the opponent double rewards moves that shrink their options
/// even at the cost of one's own.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityDiff;

impl<S: GameState> Evaluator<S> for MobilityDiff {
    fn score(&self, state: &S, player: PlayerId) -> f64 {
        if let Some(v) = terminal_score(state, player) {
            return v;
        }

        let own = state.get_legal_moves(player).len() as f64;
        let opp = state.get_legal_moves(state.get_opponent(player)).len() as f64;
        own - opp * 2.0
    }
}

/// Fixed linear weighting of mobility, centrality and player distance.
#[derive(Clone, Copy, Debug)]
pub struct WeightedFeatures {
    /// Weights over [mobility difference, center distance, player distance].
    pub weights: [f64; 3],
}

impl Default for WeightedFeatures {
    fn default() -> Self {
        Self {
            weights: [2.2, -1.2, -0.5],
        }
    }
}

impl<S: GameState> Evaluator<S> for WeightedFeatures {
    fn score(&self, state: &S, player: PlayerId) -> f64 {
        if let Some(v) = terminal_score(state, player) {
            return v;
        }

        let features = [
            mobility_difference(state, player),
            distance_from_center(state, player),
            distance_between_players(state, player),
        ];

        features
            .iter()
            .zip(self.weights.iter())
            .map(|(f, w)| f * w)
            .sum()
    }
}

/// Phase-weighted mobility blend scaled by inter-player distance.
///
/// Early in the game plain mobility difference drives the score; once a
/// third of the board has been played, the opponent's mobility is weighted
/// double. The blend is divided by the Manhattan distance between the
/// players, so equal mobility close to the opponent beats equal mobility
/// far away. The distance is clamped to at least one square to keep the
/// division defined.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceScaledMobility;

/// Board fraction past which the opponent's mobility is weighted double.
const LATE_GAME_FRACTION: f64 = 0.33;

impl<S: GameState> Evaluator<S> for DistanceScaledMobility {
    fn score(&self, state: &S, player: PlayerId) -> f64 {
        if let Some(v) = terminal_score(state, player) {
            return v;
        }

        let own = state.get_legal_moves(player).len() as f64;
        let opp = state.get_legal_moves(state.get_opponent(player)).len() as f64;

        let board = (state.height() * state.width()) as f64;
        let played_fraction = state.move_count() as f64 / board;
        let move_diff = if played_fraction > LATE_GAME_FRACTION {
            own - opp * 2.0
        } else {
            own - opp
        };

        let distance = distance_between_players(state, player).max(1.0);
        move_diff / distance
    }
}
