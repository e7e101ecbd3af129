//! Trailing-edge debounce with a single pending task.
//!
//! DESIGN
//! ======
//! Each signal re-arms the debouncer and hands back a [`Ticket`]. The host
//! schedules one wake-up per ticket after the quiet period; on wake it calls
//! [`Debouncer::settle`], which succeeds only for the most recent ticket.
//! Superseded wake-ups find a stale ticket and do nothing, so no timer handle
//! ever has to be cancelled.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one signal; only the latest ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    generation: u64,
    due_ms: f64,
}

impl Ticket {
    /// Earliest time this ticket can settle.
    #[must_use]
    pub fn due_ms(self) -> f64 {
        self.due_ms
    }
}

/// Coalesces bursts of signals into one trailing action.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_ms: u32,
    generation: u64,
    last_signal_ms: Option<f64>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_ms: u32) -> Self {
        Self { quiet_ms, generation: 0, last_signal_ms: None }
    }

    #[must_use]
    pub fn quiet_ms(&self) -> u32 {
        self.quiet_ms
    }

    /// Record a signal at `now_ms`, superseding any pending one.
    pub fn signal(&mut self, now_ms: f64) -> Ticket {
        self.generation += 1;
        self.last_signal_ms = Some(now_ms);
        Ticket { generation: self.generation, due_ms: now_ms + f64::from(self.quiet_ms) }
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_signal_ms.is_some()
    }

    /// When the pending action becomes due, if any.
    #[must_use]
    pub fn due_at(&self) -> Option<f64> {
        self.last_signal_ms.map(|t| t + f64::from(self.quiet_ms))
    }

    /// Returns `true` exactly once per burst: for the latest ticket, once the
    /// quiet period since the last signal has elapsed.
    pub fn settle(&mut self, ticket: Ticket, now_ms: f64) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.due_at() {
            Some(due) if now_ms >= due => {
                self.last_signal_ms = None;
                true
            }
            _ => false,
        }
    }
}
