//! Cancellation and deadlines for a single search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{NavError, Result};

/// Shared flag that lets another thread abort a running search.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Per-query limits checked before every expansion
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Fail if the search should stop now.
    pub(super) fn check(&self, started: Instant) -> Result<()> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(NavError::Cancelled);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(NavError::DeadlineExceeded {
                elapsed_ms: started.elapsed().as_millis() as u64,
            });
        }
        Ok(())
    }
}
