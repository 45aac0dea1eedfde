use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// cooperative cancellation for a line search, checked between candidates.
/// a search stops once its flag is raised or its deadline has passed.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl SearchControl {
    pub fn new() -> SearchControl {
        SearchControl::default()
    }

    pub fn with_time_limit(limit: Duration) -> SearchControl {
        SearchControl {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + limit),
        }
    }

    /// shared flag that cancels the search when set, e.g. from another thread.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        let cancelled = self.cancelled.load(Ordering::Relaxed);
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        cancelled || expired
    }
}
