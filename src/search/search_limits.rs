//! Optional bounds on a search: a wall-clock deadline and a shared stop flag.
//!
//! Neither is needed for fixed-depth play. Iterative deepening polls both
//! between nodes and discards an interrupted iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cloneable cancellation handle shared between the caller and the search.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub deadline: Option<Instant>,
    pub stop: Option<StopFlag>,
}

impl SearchLimits {
    /// No deadline, no stop flag.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_movetime(movetime: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + movetime),
            stop: None,
        }
    }

    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    /// True only when the stop flag was raised, whatever the deadline says.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stop.as_ref().is_some_and(StopFlag::is_stopped)
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        if self.is_cancelled() {
            return true;
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_limits_never_stop() {
        assert!(!SearchLimits::unbounded().should_stop());
    }

    #[test]
    fn stop_flag_is_shared_between_clones() {
        let flag = StopFlag::new();
        let limits = SearchLimits::unbounded().with_stop_flag(flag.clone());
        assert!(!limits.should_stop());
        flag.stop();
        assert!(limits.should_stop());
        assert!(limits.is_cancelled());
    }

    #[test]
    fn elapsed_deadline_stops() {
        let limits = SearchLimits::with_movetime(Duration::ZERO);
        assert!(limits.should_stop());
        assert!(!limits.is_cancelled());
    }
}
