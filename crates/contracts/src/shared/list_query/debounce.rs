use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Generation handed out by [`DebounceGate::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// What the caller of [`DebounceGate::schedule`] has to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: DebounceTicket,
    /// `None` for the very first schedule: run right away
    pub delay: Option<Duration>,
}

/// Timer-free debounce.
///
/// Every `schedule` supersedes the previous one. The caller waits for
/// `delay` with whatever timer its runtime offers and then proceeds only if
/// `is_current` still holds. After `cancel` nothing is ever current again.
#[derive(Debug)]
pub struct DebounceGate {
    delay: Duration,
    generation: AtomicU64,
    started: AtomicBool,
    closed: AtomicBool,
}

impl DebounceGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
            started: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn schedule(&self) -> Scheduled {
        let ticket = DebounceTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        let first = !self.started.swap(true, Ordering::SeqCst);
        Scheduled {
            ticket,
            delay: if first || self.delay.is_zero() {
                None
            } else {
                Some(self.delay)
            },
        }
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Drop whatever is pending and refuse everything afterwards
    pub fn cancel(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_schedule_is_immediate() {
        let gate = DebounceGate::from_millis(300);
        assert_eq!(gate.schedule().delay, None);
        assert_eq!(gate.schedule().delay, Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_burst_leaves_only_last_current() {
        let gate = DebounceGate::from_millis(500);
        gate.schedule();
        let burst: Vec<_> = (0..5).map(|_| gate.schedule().ticket).collect();
        let current: Vec<_> = burst.iter().filter(|t| gate.is_current(**t)).collect();
        assert_eq!(current, vec![&burst[4]]);
    }

    #[test]
    fn test_cancel_closes_gate() {
        let gate = DebounceGate::from_millis(500);
        let pending = gate.schedule();
        gate.cancel();
        assert!(!gate.is_current(pending.ticket));
        let after = gate.schedule();
        assert!(!gate.is_current(after.ticket));
        assert!(gate.is_closed());
    }
}
