//! Cooperative cancellation shared by every strategy and worker

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared stop flag with an optional deadline
///
/// Clones observe the same flag. Workers poll [`is_cancelled`] after each
/// trial; once the deadline passes the token latches into the cancelled
/// state and records that it timed out.
///
/// [`is_cancelled`]: CancellationToken::is_cancelled
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    timed_out: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that cancels itself `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            ..Self::default()
        }
    }

    /// Token for an optional budget
    pub fn with_optional_timeout(timeout: Option<Duration>) -> Self {
        match timeout {
            Some(timeout) => Self::with_timeout(timeout),
            None => Self::new(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                if !self.timed_out.swap(true, Ordering::SeqCst) {
                    tracing::warn!("analysis time budget exhausted; stopping search");
                }
                self.cancelled.store(true, Ordering::SeqCst);
                true
            }
            _ => false,
        }
    }

    /// True once the deadline (not an explicit cancel) stopped the run
    pub fn timed_out(&self) -> bool {
        self.timed_out.load(Ordering::SeqCst)
    }
}
