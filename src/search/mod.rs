//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Two searchers share the same recursive structure and the same
//! fixed-perspective evaluation convention (every position is scored for
//! the player who was active at the root):
//!
//! - `MinimaxSearcher`: exhaustive fixed-depth search
//! - `AlphaBetaSearcher`: pruned search with iterative deepening
//!
//! Both run under a cooperative deadline: every recursive step probes the
//! caller's remaining-time function first, and once the safety threshold is
//! crossed the whole in-progress search unwinds as `Err(SearchTimeout)` to
//! the top-level `get_move`, which falls back to the best complete result.
//!
//! ## Usage
//!
//! ```rust
//! use rust_isolation::games::KnightBoard;
//! use rust_isolation::search::{AlphaBetaSearcher, SearchConfig};
//!
//! let board = KnightBoard::random_position(42, 4);
//! let mut searcher: AlphaBetaSearcher<KnightBoard> =
//!     AlphaBetaSearcher::new(SearchConfig::default());
//!
//! // The probe reports remaining milliseconds; here a synthetic countdown
//! let mv = searcher.get_move(&board, {
//!     let budget = std::cell::Cell::new(500.0);
//!     move || {
//!         let left = budget.get();
//!         budget.set(left - 1.0);
//!         left
//!     }
//! });
//! assert!(!mv.is_none());
//! ```
//!
//! ## Custom Evaluators
//!
//! Evaluation strategies are passed as values, not subclasses:
//!
//! ```rust,ignore
//! let searcher = AlphaBetaSearcher::new(config).with_evaluator(MobilityDiff);
//! ```

pub mod alphabeta;
pub mod config;
pub mod context;
pub mod deadline;
pub mod heuristic;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use alphabeta::AlphaBetaSearcher;
pub use config::SearchConfig;
pub use context::SearchContext;
pub use deadline::{Deadline, SearchTimeout};
pub use heuristic::{
    distance_between_players, distance_from_center, mobility_difference, DistanceScaledMobility,
    Evaluator, MobilityDiff, WeightedFeatures,
};
pub use minimax::MinimaxSearcher;
pub use stats::SearchStats;
