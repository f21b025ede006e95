use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Lifetime flag shared between a component and the requests it spawned.
///
/// The component cancels the token from `on_cleanup`; response handlers check
/// it before touching any signal.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Runs `apply` only while the owner is still alive.
    pub fn run_if_active<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        apply(value);
        true
    }
}

/// Monotonic ticket dispenser: only the latest ticket's result is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_token_skips_apply() {
        let token = CancelToken::new();
        let clone = token.clone();
        let mut applied = Vec::new();

        assert!(token.run_if_active(1, |v| applied.push(v)));
        clone.cancel();
        assert!(token.is_cancelled());
        assert!(!token.run_if_active(2, |v| applied.push(v)));
        assert_eq!(applied, vec![1]);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
