//! Gate state machines for the disclaimer and the patcher-before-executor
//! ordering.
//!
//! Both gates are pure functions of the persisted flags at evaluation time;
//! there is no separate state object to keep in sync with storage. The
//! frontend seeds its signals from the flags once and routes every
//! transition through these types.

/// First-visit disclaimer gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclaimerGate {
    AwaitingAcknowledgment,
    Acknowledged,
}

impl DisclaimerGate {
    pub fn from_flag(seen: bool) -> Self {
        if seen {
            DisclaimerGate::Acknowledged
        } else {
            DisclaimerGate::AwaitingAcknowledgment
        }
    }

    /// Attempt the `Visible -> Hidden` transition. Succeeds only while the
    /// acknowledgment checkbox is checked; once acknowledged there is no
    /// transition back within a session.
    pub fn acknowledge(self, checkbox_checked: bool) -> Self {
        match self {
            DisclaimerGate::AwaitingAcknowledgment if checkbox_checked => {
                DisclaimerGate::Acknowledged
            }
            other => other,
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        matches!(self, DisclaimerGate::Acknowledged)
    }
}

/// Two-stage download gate: the executor is held back until the patcher has
/// been downloaded at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatcherGate {
    Pending,
    Ready,
}

/// Outcome of an executor download request.
///
/// `Blocked` is a normal control-flow branch that produces the
/// patcher-required modal; it is not an error and not retryable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutorDecision {
    Proceed,
    Blocked,
}

impl PatcherGate {
    pub fn from_flag(patcher_downloaded: bool) -> Self {
        if patcher_downloaded {
            PatcherGate::Ready
        } else {
            PatcherGate::Pending
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PatcherGate::Ready)
    }

    pub fn evaluate_executor_request(&self) -> ExecutorDecision {
        match self {
            PatcherGate::Ready => ExecutorDecision::Proceed,
            PatcherGate::Pending => ExecutorDecision::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_requires_checked_box() {
        let gate = DisclaimerGate::AwaitingAcknowledgment;
        assert_eq!(gate.acknowledge(false), DisclaimerGate::AwaitingAcknowledgment);
        assert_eq!(gate.acknowledge(true), DisclaimerGate::Acknowledged);
    }

    #[test]
    fn test_acknowledged_never_reverts() {
        let gate = DisclaimerGate::Acknowledged;
        assert_eq!(gate.acknowledge(false), DisclaimerGate::Acknowledged);
        assert_eq!(gate.acknowledge(true), DisclaimerGate::Acknowledged);
    }

    #[test]
    fn test_disclaimer_from_flag() {
        assert!(DisclaimerGate::from_flag(true).is_acknowledged());
        assert!(!DisclaimerGate::from_flag(false).is_acknowledged());
    }

    #[test]
    fn test_executor_blocked_until_patcher_ready() {
        assert_eq!(
            PatcherGate::Pending.evaluate_executor_request(),
            ExecutorDecision::Blocked
        );
        assert_eq!(
            PatcherGate::Ready.evaluate_executor_request(),
            ExecutorDecision::Proceed
        );
    }

    #[test]
    fn test_patcher_from_flag() {
        assert!(PatcherGate::from_flag(true).is_ready());
        assert!(!PatcherGate::from_flag(false).is_ready());
    }
}
