//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth limit in plies for fixed-depth search (default: 3).
    /// Iterative deepening ignores this and grows its own limit from 1.
    /// Must be at least 1.
    pub search_depth: u32,

    /// Safety margin in milliseconds before the true deadline (default: 19.0).
    /// Search aborts once the remaining-time probe falls below this value,
    /// leaving enough time to unwind and return.
    pub timeout_threshold_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            timeout_threshold_ms: 19.0,
        }
    }
}

impl SearchConfig {
    /// Create a config, failing fast on a malformed depth.
    #[must_use]
    pub fn new(search_depth: u32, timeout_threshold_ms: f64) -> Self {
        assert!(search_depth >= 1, "search_depth must be at least 1");
        assert!(
            timeout_threshold_ms >= 0.0,
            "timeout_threshold_ms must be non-negative"
        );
        Self {
            search_depth,
            timeout_threshold_ms,
        }
    }

    /// Create a new config with a custom depth limit.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        assert!(depth >= 1, "search_depth must be at least 1");
        self.search_depth = depth;
        self
    }

    /// Create a new config with a custom timeout threshold.
    #[must_use]
    pub fn with_timeout_threshold(mut self, threshold_ms: f64) -> Self {
        assert!(
            threshold_ms >= 0.0,
            "timeout_threshold_ms must be non-negative"
        );
        self.timeout_threshold_ms = threshold_ms;
        self
    }
}
