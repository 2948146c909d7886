//! Per-call search state.

use crate::core::Move;
use crate::search::deadline::{Deadline, SearchTimeout};

/// Mutable state scoped to a single `get_move` invocation.
///
/// Holds the deadline, the node-visit counter and the best root move found
/// so far. Keeping these per call rather than on the searcher means a
/// timeout mid-search still leaves the best complete root result readable,
/// and independent searches never interfere.
pub struct SearchContext<F: Fn() -> f64> {
    /// Cooperative deadline, probed at the top of every recursive step.
    pub deadline: Deadline<F>,

    /// Nodes visited so far (cutoff tests performed).
    pub nodes_visited: u64,

    /// Best fully-scored root move so far; `Move::NONE` until one exists.
    pub best_move: Move,
}

impl<F: Fn() -> f64> SearchContext<F> {
    /// Create a fresh context for one search call.
    pub fn new(deadline: Deadline<F>) -> Self {
        Self {
            deadline,
            nodes_visited: 0,
            best_move: Move::NONE,
        }
    }

    /// Probe the deadline; `Err` unwinds the in-progress search.
    pub fn check_deadline(&self) -> Result<(), SearchTimeout> {
        self.deadline.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context() {
        let ctx = SearchContext::new(Deadline::new(|| 100.0, 19.0));
        assert_eq!(ctx.nodes_visited, 0);
        assert!(ctx.best_move.is_none());
        assert!(ctx.check_deadline().is_ok());
    }
}
