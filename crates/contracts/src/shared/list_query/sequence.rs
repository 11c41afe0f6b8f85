use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed to an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// "Last request issued wins".
///
/// Each issued request takes the next number; a response may be applied only
/// while its ticket is still the latest one issued. `invalidate` bumps the
/// counter without issuing, so every outstanding ticket goes stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_request_wins() {
        let sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(first < second);
        // second resolves first, then the slow first one arrives
        assert!(sequence.is_latest(second));
        assert!(!sequence.is_latest(first));
    }

    #[test]
    fn test_invalidate_makes_all_stale() {
        let sequence = RequestSequence::new();
        let ticket = sequence.issue();
        sequence.invalidate();
        assert!(!sequence.is_latest(ticket));
        assert!(sequence.is_latest(sequence.issue()));
    }
}
