//! Iterative-deepening alpha-beta search.
//!
//! Same recursive shape and fixed-perspective evaluation as minimax, plus
//! pruning bounds. Alpha and beta are passed unmodified to deeper calls;
//! there is no bound negation, because every level scores positions for the
//! same root player.
//!
//! `get_move` is an anytime algorithm: it completes depth 1, then depth 2,
//! and so on, each completed depth overwriting the best-known move, until
//! the deadline cancels the in-flight iteration. The caller's clock drives
//! termination; a probe that never falls below the threshold keeps the
//! loop deepening indefinitely.

use std::time::Instant;

use crate::board::GameState;
use crate::core::{Move, PlayerId};

use super::config::SearchConfig;
use super::context::SearchContext;
use super::deadline::{Deadline, SearchTimeout};
use super::heuristic::{DistanceScaledMobility, Evaluator};
use super::stats::SearchStats;

/// Game-playing searcher using iterative-deepening alpha-beta pruning.
pub struct AlphaBetaSearcher<S: GameState> {
    config: SearchConfig,
    evaluator: Box<dyn Evaluator<S>>,
    stats: SearchStats,
}

impl<S: GameState> AlphaBetaSearcher<S> {
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

    /// Statistics from the most recent search call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the best move and return before the time limit expires.
    ///
    /// Iterative deepening: repeats the depth-limited search with growing
    /// depth, keeping the move from the last fully completed depth. When
    /// the deadline cancels an iteration, the retained move is returned.
    /// If no depth ever completed, the first legal move is returned instead
    /// of forfeiting; `Move::NONE` only when there are no legal moves.
    pub fn get_move<F: Fn() -> f64>(&mut self, state: &S, time_left: F) -> Move {
        let start = Instant::now();
        self.stats.reset();

        let deadline = Deadline::new(time_left, self.config.timeout_threshold_ms);
        let mut ctx = SearchContext::new(deadline);

        let mut best = Move::NONE;
        let mut depth = 1;
        loop {
            match self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, &mut ctx) {
                // Deeper results always replace shallower ones, never partially
                Ok(mv) => {
                    best = mv;
                    self.stats.depth_completed = depth;
                    depth += 1;
                }
                Err(SearchTimeout) => {
                    self.stats.timed_out = true;
                    break;
                }
            }
        }

        // No completed depth: take the first enumerated legal move rather
        // than forfeiting
        if best.is_none() {
            if let Some(&first) = state.legal_moves().first() {
                best = first;
            }
        }

        self.stats.nodes_visited = ctx.nodes_visited;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Single fixed-depth alpha-beta search, bypassing iterative deepening.
    ///
    /// Intended for deterministic testing at a known depth. Returns
    /// `Move::NONE` if the deadline cancels before the depth completes.
    pub fn search_at_depth<F: Fn() -> f64>(
        &mut self,
        state: &S,
        time_left: F,
        depth_limit: u32,
    ) -> Move {
        let start = Instant::now();
        self.stats.reset();

        let deadline = Deadline::new(time_left, self.config.timeout_threshold_ms);
        let mut ctx = SearchContext::new(deadline);

        let best = match self.alphabeta(
            state,
            depth_limit,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut ctx,
        ) {
            Ok(mv) => {
                self.stats.depth_completed = depth_limit;
                mv
            }
            Err(SearchTimeout) => {
                self.stats.timed_out = true;
                Move::NONE
            }
        };

        self.stats.nodes_visited = ctx.nodes_visited;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Depth-limited alpha-beta decision.
    ///
    /// Runs the maximizer at the root with the sentinel as the originating
    /// move and returns the move associated with the best value.
    fn alphabeta<F: Fn() -> f64>(
        &self,
        state: &S,
        depth_limit: u32,
        alpha: f64,
        beta: f64,
        ctx: &mut SearchContext<F>,
    ) -> Result<Move, SearchTimeout> {
        let root = state.active_player();
        let (_, best_move) =
            self.max_value(state, Move::NONE, root, alpha, beta, depth_limit, ctx)?;
        Ok(best_move)
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

    /// Minimizer: tracks the minimum value and its originating move.
    ///
    /// Prunes as soon as the running value cannot exceed `alpha`; otherwise
    /// tightens `beta` downward.
    #[allow(clippy::too_many_arguments)]
    fn min_value<F: Fn() -> f64>(
        &self,
        state: &S,
        mv: Move,
        root: PlayerId,
        alpha: f64,
        mut beta: f64,
        depth: u32,
        ctx: &mut SearchContext<F>,
    ) -> Result<(f64, Move), SearchTimeout> {
        ctx.check_deadline()?;

        if self.cutoff_test(state, root, depth, ctx) {
            return Ok((self.evaluator.score(state, root), mv));
        }

        let mut value = f64::INFINITY;
        let mut worst_move = Move::NONE;
        for legal in state.legal_moves() {
            let next = state.forecast_move(legal);
            let (next_value, _) =
                self.max_value(&next, legal, root, alpha, beta, depth - 1, ctx)?;
            if next_value < value {
                value = next_value;
                worst_move = legal;
            }
            if value <= alpha {
                return Ok((value, worst_move));
            }
            beta = beta.min(value);
        }
        Ok((value, worst_move))
    }

    /// Maximizer: tracks the maximum value and its originating move.
    ///
    /// Prunes as soon as the running value cannot stay under `beta`;
    /// otherwise tightens `alpha` upward.
    #[allow(clippy::too_many_arguments)]
    fn max_value<F: Fn() -> f64>(
        &self,
        state: &S,
        mv: Move,
        root: PlayerId,
        mut alpha: f64,
        beta: f64,
        depth: u32,
        ctx: &mut SearchContext<F>,
    ) -> Result<(f64, Move), SearchTimeout> {
        ctx.check_deadline()?;

        if self.cutoff_test(state, root, depth, ctx) {
            return Ok((self.evaluator.score(state, root), mv));
        }

        let mut value = f64::NEG_INFINITY;
        let mut best_move = Move::NONE;
        for legal in state.legal_moves() {
            let next = state.forecast_move(legal);
            let (next_value, _) =
                self.min_value(&next, legal, root, alpha, beta, depth - 1, ctx)?;
            if next_value > value {
                value = next_value;
                best_move = legal;
            }
            if value >= beta {
                return Ok((value, best_move));
            }
            alpha = alpha.max(value);
        }
        Ok((value, best_move))
    }
}
