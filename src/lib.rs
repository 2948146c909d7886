//! # rust-isolation
//!
//! An adversarial search engine for deterministic, perfect-information,
//! two-player zero-sum board games played under a hard wall-clock deadline.
//!
//! ## Design Principles
//!
//! 1. **Board-Agnostic**: Searchers consume boards through the `GameState`
//!    trait; any game with stable move enumeration and immutable
//!    forecasting can plug in.
//!
//! 2. **Fixed-Perspective Evaluation**: Every position in a search tree is
//!    scored for the player who was active at the root. There is no
//!    sign-flipped (negamax) convention anywhere.
//!
//! 3. **Cooperative Cancellation**: The deadline is probed at the top of
//!    every recursive step. Crossing the threshold unwinds the entire
//!    in-progress search; only the top-level `get_move` absorbs the signal
//!    and degrades to the last complete result.
//!
//! 4. **Deterministic Tie-Breaking**: Boards enumerate legal moves in a
//!    stable order, and searchers keep the first-encountered maximal value,
//!    so results reproduce exactly across runs.
//!
//! ## Architecture
//!
//! - **Immutable Forecasting**: `forecast_move` returns a new state, so
//!   sibling branches never share mutable data and no locking is needed.
//!   The reference board uses `im` persistent vectors to keep those clones
//!   cheap.
//!
//! - **Anytime Alpha-Beta**: Iterative deepening retains the move of the
//!   last fully completed depth; deeper results replace shallower ones
//!   wholesale, never partially.
//!
//! ## Modules
//!
//! - `core`: Player IDs, moves and the sentinel, deterministic RNG
//! - `board`: `GameState` trait consumed by the searchers
//! - `games`: Reference board implementation (knight-move isolation)
//! - `search`: Evaluators, deadline plumbing, minimax and alpha-beta

pub mod board;
pub mod core;
pub mod games;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, Move, MoveList, PlayerId};

pub use crate::board::GameState;

pub use crate::games::KnightBoard;

pub use crate::search::{
    AlphaBetaSearcher, Deadline, DistanceScaledMobility, Evaluator, MinimaxSearcher, MobilityDiff,
    SearchConfig, SearchStats, SearchTimeout, WeightedFeatures,
};
