//! Optimistic toggle with server reconciliation.
//!
//! Like and bookmark actions apply their state change before the server
//! answers, then reconcile against the authoritative response. The three
//! phases are an explicit tagged state per card instance rather than ad
//! hoc booleans, so the reconciliation path is testable in isolation:
//!
//! ```text
//! Idle --begin()--> Pending --confirm()/settle()--> Reconciled
//!                      \--rollback()--> Idle
//! ```
//!
//! `begin()` refuses while a request is already in flight, which is the
//! page-level duplicate-submission discipline for these buttons.

/// Lifecycle phase of one optimistic toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    /// No request in flight; displayed state is whatever the server last said.
    Idle,
    /// Tentative state shown; awaiting the server's answer.
    Pending,
    /// Server truth applied after at least one round trip.
    Reconciled,
}

/// One like/bookmark toggle: displayed state plus the snapshot needed to
/// roll a failed request back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimisticToggle {
    phase: TogglePhase,
    active: bool,
    count: u64,
    snapshot: (bool, u64),
}

impl OptimisticToggle {
    pub fn new(active: bool, count: u64) -> Self {
        Self {
            phase: TogglePhase::Idle,
            active,
            count,
            snapshot: (active, count),
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == TogglePhase::Pending
    }

    /// Apply the tentative flip and enter `Pending`. Returns `false` (and
    /// changes nothing) when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.snapshot = (self.active, self.count);
        self.active = !self.active;
        self.count = if self.active {
            self.count.saturating_add(1)
        } else {
            self.count.saturating_sub(1)
        };
        self.phase = TogglePhase::Pending;
        true
    }

    /// Overwrite with server truth (active state and count).
    pub fn confirm(&mut self, active: bool, count: u64) {
        self.active = active;
        self.count = count;
        self.phase = TogglePhase::Reconciled;
    }

    /// Overwrite with server truth for endpoints that report no count.
    pub fn settle(&mut self, active: bool) {
        self.active = active;
        self.phase = TogglePhase::Reconciled;
    }

    /// Restore the pre-toggle snapshot after a failed request.
    pub fn rollback(&mut self) {
        (self.active, self.count) = self.snapshot;
        self.phase = TogglePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_reconciles_against_server_truth() {
        // Card shows 4 likes, not liked.
        let mut toggle = OptimisticToggle::new(false, 4);

        // Click: optimistic state is liked / 5 while the request runs.
        assert!(toggle.begin());
        assert!(toggle.active());
        assert_eq!(toggle.count(), 5);
        assert!(toggle.is_pending());

        // Server says the like did not stick: back to 4 / not liked.
        toggle.confirm(false, 4);
        assert!(!toggle.active());
        assert_eq!(toggle.count(), 4);
        assert_eq!(toggle.phase(), TogglePhase::Reconciled);
    }

    #[test]
    fn test_begin_refuses_while_pending() {
        let mut toggle = OptimisticToggle::new(false, 0);
        assert!(toggle.begin());
        // Rapid second click: refused, state unchanged.
        assert!(!toggle.begin());
        assert!(toggle.active());
        assert_eq!(toggle.count(), 1);
    }

    #[test]
    fn test_rollback_restores_snapshot() {
        let mut toggle = OptimisticToggle::new(true, 7);
        assert!(toggle.begin());
        assert!(!toggle.active());
        assert_eq!(toggle.count(), 6);

        toggle.rollback();
        assert!(toggle.active());
        assert_eq!(toggle.count(), 7);
        assert_eq!(toggle.phase(), TogglePhase::Idle);

        // After a rollback the toggle accepts a new attempt.
        assert!(toggle.begin());
    }

    #[test]
    fn test_count_saturates_at_zero() {
        let mut toggle = OptimisticToggle::new(true, 0);
        assert!(toggle.begin());
        assert_eq!(toggle.count(), 0);
    }

    #[test]
    fn test_settle_keeps_count_for_countless_toggles() {
        let mut toggle = OptimisticToggle::new(false, 0);
        assert!(toggle.begin());
        toggle.settle(true);
        assert!(toggle.active());
        assert_eq!(toggle.phase(), TogglePhase::Reconciled);

        // Toggle off again; server confirms.
        assert!(toggle.begin());
        toggle.settle(false);
        assert!(!toggle.active());
    }
}
