//! Quorum policies
//!
//! How many distinct co-owner approvals a withdrawal needs before it may
//! execute is a product decision, not an incident of the state machine. It is
//! therefore expressed as a strategy trait the engine is configured with,
//! so alternative thresholds can be swapped in without touching the workflow.

/// Strategy deciding how many approvals a withdrawal needs
///
/// Implementations must be pure functions of the owner-set size; the workflow
/// calls this on every execution attempt.
pub trait QuorumPolicy: Send + Sync {
    /// Number of distinct co-owner approvals required for an account with
    /// `owner_count` owners
    fn required_approvals(&self, owner_count: usize) -> usize;
}

/// Default policy: every co-owner except the requester must approve
///
/// `required = max(1, owner_count - 1)`. A sole owner still needs one
/// approval, which they can never provide themselves (self-approval is
/// rejected), so single-owner accounts cannot withdraw under this policy.
/// That matches the product's unanimous-minus-requester rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnanimousOtherOwners;

impl QuorumPolicy for UnanimousOtherOwners {
    fn required_approvals(&self, owner_count: usize) -> usize {
        owner_count.saturating_sub(1).max(1)
    }
}

/// Alternative policy: a fixed approval threshold regardless of owner count
///
/// The threshold is clamped to at least 1 so no account can execute a
/// withdrawal without a single co-owner approval.
#[derive(Debug, Clone, Copy)]
pub struct FixedThreshold {
    threshold: usize,
}

impl FixedThreshold {
    /// Create a fixed-threshold policy
    pub fn new(threshold: usize) -> Self {
        FixedThreshold {
            threshold: threshold.max(1),
        }
    }
}

impl QuorumPolicy for FixedThreshold {
    fn required_approvals(&self, _owner_count: usize) -> usize {
        self.threshold
    }
}
