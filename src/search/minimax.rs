//! Fixed-depth minimax search.
//!
//! Exhaustive depth-first search with no pruning. Both recursive helpers
//! score every position for the same fixed root player: `max_value` runs on
//! the root player's turns and `min_value` on the opponent's, but neither
//! flips the evaluation perspective.
//!
//! `get_move` performs exactly one fixed-depth attempt. On timeout it
//! returns the best root move that was fully scored before the deadline
//! hit, which may still be the sentinel.

use std::time::Instant;

use crate::board::GameState;
use crate::core::{Move, PlayerId};

use super::config::SearchConfig;
use super::context::SearchContext;
use super::deadline::{Deadline, SearchTimeout};
use super::heuristic::{DistanceScaledMobility, Evaluator};
use super::stats::SearchStats;

/// Game-playing searcher using depth-limited minimax.
pub struct MinimaxSearcher<S: GameState> {
    config: SearchConfig,
    evaluator: Box<dyn Evaluator<S>>,
    stats: SearchStats,
}

impl<S: GameState> MinimaxSearcher<S> {
    /// Create a searcher with the default evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: Box::new(DistanceScaledMobility),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator strategy.
    pub fn with_evaluator<E: Evaluator<S> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent `get_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the best move and return before the time limit expires.
    ///
    /// Performs a single search at the configured depth. If the deadline
    /// cancels it, the best root move scored so far is returned; with no
    /// legal moves (or no complete root score) that is `Move::NONE`.
    pub fn get_move<F: Fn() -> f64>(&mut self, state: &S, time_left: F) -> Move {
        let start = Instant::now();
        self.stats.reset();

        let deadline = Deadline::new(time_left, self.config.timeout_threshold_ms);
        let mut ctx = SearchContext::new(deadline);

        let best = match self.minimax(state, self.config.search_depth, &mut ctx) {
            Ok(mv) => {
                self.stats.depth_completed = self.config.search_depth;
                mv
            }
            // Fall back to the best complete result obtained so far
            Err(SearchTimeout) => {
                self.stats.timed_out = true;
                ctx.best_move
            }
        };

        self.stats.nodes_visited = ctx.nodes_visited;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Depth-limited minimax decision over the root moves.
    ///
    /// Keeps the move with strictly greater value than the current best, so
    /// the first move encountered wins all ties. Returns `Move::NONE` when
    /// there are no legal moves.
    fn minimax<F: Fn() -> f64>(
        &self,
        state: &S,
        depth_limit: u32,
        ctx: &mut SearchContext<F>,
    ) -> Result<Move, SearchTimeout> {
        ctx.check_deadline()?;

        let root = state.active_player();
        let mut best_value = f64::NEG_INFINITY;

        for mv in state.legal_moves() {
            let next = state.forecast_move(mv);
            let value = self.min_value(&next, root, depth_limit - 1, ctx)?;
            if value > best_value {
                best_value = value;
                ctx.best_move = mv;
            }
        }

        Ok(ctx.best_move)
    }

    /// True when the remaining depth is exhausted or neither player can move.
    ///
    /// Counts one node visit per call.
    fn cutoff_test<F: Fn() -> f64>(
        &self,
        state: &S,
        root: PlayerId,
        depth: u32,
        ctx: &mut SearchContext<F>,
    ) -> bool {
        ctx.nodes_visited += 1;
        let root_moves = state.get_legal_moves(root).len();
        let opponent_moves = state.get_legal_moves(state.get_opponent(root)).len();
        depth == 0 || (root_moves == 0 && opponent_moves == 0)
    }

    /// Minimum over all legal continuations, scored for the root player.
    fn min_value<F: Fn() -> f64>(
        &self,
        state: &S,
        root: PlayerId,
        depth: u32,
        ctx: &mut SearchContext<F>,
    ) -> Result<f64, SearchTimeout> {
        ctx.check_deadline()?;

        if self.cutoff_test(state, root, depth, ctx) {
            return Ok(self.evaluator.score(state, root));
        }

        let mut value = f64::INFINITY;
        for mv in state.legal_moves() {
            let next = state.forecast_move(mv);
            value = value.min(self.max_value(&next, root, depth - 1, ctx)?);
        }
        Ok(value)
    }

    /// Maximum over all legal continuations, scored for the root player.
    fn max_value<F: Fn() -> f64>(
        &self,
        state: &S,
        root: PlayerId,
        depth: u32,
        ctx: &mut SearchContext<F>,
    ) -> Result<f64, SearchTimeout> {
        ctx.check_deadline()?;

        if self.cutoff_test(state, root, depth, ctx) {
            return Ok(self.evaluator.score(state, root));
        }

        let mut value = f64::NEG_INFINITY;
        for mv in state.legal_moves() {
            let next = state.forecast_move(mv);
            value = value.max(self.min_value(&next, root, depth - 1, ctx)?);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::KnightBoard;
    use crate::search::heuristic::MobilityDiff;

    const GENEROUS: fn() -> f64 = || 1_000_000.0;

    /// Player 0 to move from (2, 0) on 5x5; jumping to (1, 2) seals the
    /// opponent's last escape and wins immediately.
    fn winning_position() -> KnightBoard {
        let mut board = KnightBoard::with_size(5, 5);
        board.place(PlayerId::new(1), 0, 0);
        board.place(PlayerId::new(0), 2, 0);
        board.block(2, 1);
        board.set_active(PlayerId::new(0));
        board
    }

    #[test]
    fn test_returns_legal_move() {
        let board = KnightBoard::random_position(42, 6);
        let mut searcher = MinimaxSearcher::new(SearchConfig::default());

        let mv = searcher.get_move(&board, GENEROUS);
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_takes_immediate_win_at_depth_1() {
        let board = winning_position();
        let mut searcher =
            MinimaxSearcher::new(SearchConfig::default().with_depth(1)).with_evaluator(MobilityDiff);

        let mv = searcher.get_move(&board, GENEROUS);
        assert_eq!(mv, Move::new(1, 2));
    }

    #[test]
    fn test_tie_broken_by_enumeration_order() {
        // Symmetric position: both moves score identically at depth 1
        let mut board = KnightBoard::new();
        board.place(PlayerId::new(0), 0, 0);
        board.place(PlayerId::new(1), 6, 6);
        board.set_active(PlayerId::new(0));

        let mut searcher =
            MinimaxSearcher::new(SearchConfig::default().with_depth(1)).with_evaluator(MobilityDiff);

        let moves = board.legal_moves();
        assert_eq!(moves.len(), 2);

        let mv = searcher.get_move(&board, GENEROUS);
        assert_eq!(mv, moves[0]);
    }

    #[test]
    fn test_sentinel_when_no_legal_moves() {
        let mut board = KnightBoard::with_size(3, 3);
        board.place(PlayerId::new(0), 0, 0);
        board.place(PlayerId::new(1), 2, 2);
        board.block(1, 2);
        board.block(2, 1);
        board.set_active(PlayerId::new(0));

        let mut searcher = MinimaxSearcher::new(SearchConfig::default());
        let mv = searcher.get_move(&board, GENEROUS);
        assert!(mv.is_none());
        assert!(!searcher.stats().timed_out);
    }

    #[test]
    fn test_expired_deadline_returns_sentinel() {
        let board = KnightBoard::random_position(42, 6);
        let mut searcher = MinimaxSearcher::new(SearchConfig::default());

        let mv = searcher.get_move(&board, || 0.0);
        assert!(mv.is_none());
        assert!(searcher.stats().timed_out);
        assert_eq!(searcher.stats().depth_completed, 0);
    }

    #[test]
    fn test_stats_recorded() {
        let board = KnightBoard::random_position(42, 6);
        let mut searcher = MinimaxSearcher::new(SearchConfig::default().with_depth(2));

        searcher.get_move(&board, GENEROUS);
        let stats = searcher.stats();
        assert!(stats.nodes_visited > 0);
        assert_eq!(stats.depth_completed, 2);
        assert!(!stats.timed_out);
    }

    #[test]
    fn test_stats_reset_between_calls() {
        let board = KnightBoard::random_position(42, 6);
        let mut searcher = MinimaxSearcher::new(SearchConfig::default().with_depth(1));

        searcher.get_move(&board, GENEROUS);
        let first = searcher.stats().nodes_visited;

        searcher.get_move(&board, GENEROUS);
        assert_eq!(searcher.stats().nodes_visited, first);
    }
}
