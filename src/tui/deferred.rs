use std::time::{Duration, Instant};

/// A single-shot deferred action, armed for a deadline.
///
/// It is not a timer thread. The owner keeps the handle next to the state it
/// acts on and the event loop asks whether it is due. Dropping the handle
/// cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    due: Instant,
}

impl Deferred {
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Deferred { due: now + delay }
    }

    pub fn due_at(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left before the deadline (zero once due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
