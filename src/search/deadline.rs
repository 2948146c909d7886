//! Cooperative deadline probing and search cancellation.
//!
//! Searchers run under a hard wall-clock budget supplied by the caller as a
//! zero-argument probe returning the remaining milliseconds. Every recursive
//! expansion step probes the deadline before doing any work; once the
//! remaining time falls below the safety threshold, `check` returns
//! `Err(SearchTimeout)` and the `?` operator unwinds the whole in-progress
//! search. No intermediate frame may convert the signal into a score: it is
//! matched exactly once, at the top-level `get_move` boundary, which falls
//! back to the best complete result obtained so far.

/// Cancellation signal raised when the deadline safety threshold is crossed.
///
/// Not a user-visible failure: `get_move` absorbs it and degrades to the
/// last complete result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTimeout;

impl std::fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search aborted: deadline threshold crossed")
    }
}

impl std::error::Error for SearchTimeout {}

/// Remaining-time probe plus a fixed safety threshold.
///
/// The probe is assumed monotonically decreasing across calls within one
/// top-level search. The threshold is the margin (in milliseconds) reserved
/// for unwinding and returning before the true deadline.
pub struct Deadline<F: Fn() -> f64> {
    time_left: F,
    threshold_ms: f64,
}

impl<F: Fn() -> f64> Deadline<F> {
    /// Create a deadline from a remaining-time probe and threshold.
    pub fn new(time_left: F, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Probe the remaining time.
    ///
    /// Returns `Err(SearchTimeout)` once it has fallen below the threshold.
    /// This is a check, not a blocking wait.
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if (self.time_left)() < self.threshold_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Milliseconds remaining according to the probe.
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_generous_deadline_passes() {
        let deadline = Deadline::new(|| 1000.0, 19.0);
        assert!(deadline.check().is_ok());
        assert_eq!(deadline.remaining_ms(), 1000.0);
    }

    #[test]
    fn test_expired_deadline_fails() {
        let deadline = Deadline::new(|| 0.0, 19.0);
        assert_eq!(deadline.check(), Err(SearchTimeout));
    }

    #[test]
    fn test_threshold_boundary() {
        // Exactly at the threshold is still acceptable
        let deadline = Deadline::new(|| 19.0, 19.0);
        assert!(deadline.check().is_ok());

        let deadline = Deadline::new(|| 18.9, 19.0);
        assert!(deadline.check().is_err());
    }

    #[test]
    fn test_decreasing_probe_eventually_fails() {
        let remaining = Cell::new(25.0);
        let deadline = Deadline::new(
            || {
                let now = remaining.get();
                remaining.set(now - 10.0);
                now
            },
            19.0,
        );

        assert!(deadline.check().is_ok()); // 25.0
        assert!(deadline.check().is_err()); // 15.0
        assert!(deadline.check().is_err()); // 5.0
    }

    #[test]
    fn test_timeout_display() {
        let msg = format!("{}", SearchTimeout);
        assert!(msg.contains("deadline"));
    }
}
