//! Error types for the multisig bank ledger
//!
//! This module defines all failures a command or query can return. Every
//! failure is surfaced as a typed result; nothing is swallowed inside the
//! core. Each variant carries enough context for the presentation layer to
//! render a human-readable reason without re-querying.
//!
//! # Error Categories
//!
//! Variants group into five kinds (see [`LedgerErrorKind`]):
//!
//! - **NotFound**: the referenced account or withdrawal request is unknown
//! - **Unauthorized**: the caller is not allowed to perform the operation
//! - **InvalidInput**: the arguments themselves are malformed
//! - **Conflict**: the caller's view of state is stale; re-query before retry
//! - **Transient**: nothing happened; the same call may be retried as-is

use crate::types::account::{AccountId, Amount, WithdrawId};
use crate::types::identity::Identity;
use thiserror::Error;

/// Coarse classification of a [`LedgerError`]
///
/// Drives caller retry behavior: `Transient` failures left no partial
/// mutation and are safe to retry verbatim; `Conflict` failures mean the
/// state moved and the caller should re-query first; `Unauthorized` and
/// `InvalidInput` will fail identically on every retry with the same
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerErrorKind {
    /// Account or withdrawal request unknown
    NotFound,
    /// Caller lacks the right to perform the operation
    Unauthorized,
    /// Malformed arguments
    InvalidInput,
    /// State has moved underneath the caller
    Conflict,
    /// No mutation occurred; retryable as-is
    Transient,
}

/// Main error type for the multisig bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No account exists under the given identifier
    #[error("account {account} not found")]
    AccountNotFound {
        /// The unknown account identifier
        account: AccountId,
    },

    /// No withdrawal request exists under the given identifier
    #[error("withdrawal request {withdraw} not found on account {account}")]
    RequestNotFound {
        /// The account that was searched
        account: AccountId,
        /// The unknown withdrawal identifier
        withdraw: WithdrawId,
    },

    /// The identity is not an owner of the account
    ///
    /// Requesting, approving, and executing withdrawals are owner-only
    /// operations.
    #[error("{identity} is not an owner of account {account}")]
    NotAnOwner {
        /// The account whose owner set was checked
        account: AccountId,
        /// The identity that failed the check
        identity: Identity,
    },

    /// A requester tried to approve their own withdrawal
    ///
    /// The requester's intent is already implicit in the request; approvals
    /// must come from co-owners.
    #[error("requester may not approve their own withdrawal {withdraw} on account {account}")]
    SelfApprovalNotAllowed {
        /// The account holding the request
        account: AccountId,
        /// The withdrawal the requester tried to approve
        withdraw: WithdrawId,
    },

    /// Amount is zero
    ///
    /// Deposits and withdrawal requests must carry a positive amount.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Amount,
    },

    /// The owner set for a new account is unacceptable
    #[error("invalid owner set: {reason}")]
    InvalidOwners {
        /// Why the owner set was rejected
        reason: String,
    },

    /// A string could not be parsed as an identity
    #[error("invalid identity '{value}'")]
    InvalidIdentity {
        /// The string that failed to parse
        value: String,
    },

    /// The withdrawal request has already been executed
    ///
    /// `Executed` is terminal; no request may execute twice.
    #[error("withdrawal request {withdraw} on account {account} was already executed")]
    AlreadyExecuted {
        /// The account holding the request
        account: AccountId,
        /// The executed withdrawal
        withdraw: WithdrawId,
    },

    /// Not enough co-owners have approved the withdrawal
    #[error("quorum not met for withdrawal {withdraw} on account {account}: {approvals} of {required} approvals")]
    QuorumNotMet {
        /// The account holding the request
        account: AccountId,
        /// The withdrawal that failed the quorum check
        withdraw: WithdrawId,
        /// Approvals collected so far
        approvals: usize,
        /// Approvals required by the quorum policy
        required: usize,
    },

    /// The account balance does not cover the withdrawal amount
    #[error("insufficient balance on account {account}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// The account that was debited
        account: AccountId,
        /// Current balance
        balance: Amount,
        /// Amount the withdrawal would have transferred
        requested: Amount,
    },

    /// Balance arithmetic would overflow
    ///
    /// The mutation is rejected and the account is left unchanged.
    #[error("arithmetic overflow in {operation} on account {account}")]
    Overflow {
        /// Operation that would overflow
        operation: String,
        /// The affected account
        account: AccountId,
    },

    /// The per-account lock could not be acquired within the configured timeout
    ///
    /// No mutation occurred. The caller may retry the same call.
    #[error("account {account} is busy, lock not acquired within timeout")]
    Busy {
        /// The contended account
        account: AccountId,
    },

    /// A fact stream could not be replayed into a consistent state
    #[error("fact replay failed: {reason}")]
    Replay {
        /// Why the stream was rejected
        reason: String,
    },
}

impl LedgerError {
    /// Classify this error into its retry-relevant kind
    pub fn kind(&self) -> LedgerErrorKind {
        match self {
            LedgerError::AccountNotFound { .. } | LedgerError::RequestNotFound { .. } => {
                LedgerErrorKind::NotFound
            }
            LedgerError::NotAnOwner { .. } | LedgerError::SelfApprovalNotAllowed { .. } => {
                LedgerErrorKind::Unauthorized
            }
            LedgerError::InvalidAmount { .. }
            | LedgerError::InvalidOwners { .. }
            | LedgerError::InvalidIdentity { .. }
            | LedgerError::Replay { .. } => LedgerErrorKind::InvalidInput,
            LedgerError::AlreadyExecuted { .. }
            | LedgerError::QuorumNotMet { .. }
            | LedgerError::InsufficientBalance { .. }
            | LedgerError::Overflow { .. } => LedgerErrorKind::Conflict,
            LedgerError::Busy { .. } => LedgerErrorKind::Transient,
        }
    }

    /// Whether the same call may be retried without re-querying state
    pub fn is_retryable(&self) -> bool {
        self.kind() == LedgerErrorKind::Transient
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create a RequestNotFound error
    pub fn request_not_found(account: AccountId, withdraw: WithdrawId) -> Self {
        LedgerError::RequestNotFound { account, withdraw }
    }

    /// Create a NotAnOwner error
    pub fn not_an_owner(account: AccountId, identity: Identity) -> Self {
        LedgerError::NotAnOwner { account, identity }
    }

    /// Create a SelfApprovalNotAllowed error
    pub fn self_approval(account: AccountId, withdraw: WithdrawId) -> Self {
        LedgerError::SelfApprovalNotAllowed { account, withdraw }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InvalidOwners error
    pub fn invalid_owners(reason: impl Into<String>) -> Self {
        LedgerError::InvalidOwners {
            reason: reason.into(),
        }
    }

    /// Create an InvalidIdentity error
    pub fn invalid_identity(value: impl Into<String>) -> Self {
        LedgerError::InvalidIdentity {
            value: value.into(),
        }
    }

    /// Create an AlreadyExecuted error
    pub fn already_executed(account: AccountId, withdraw: WithdrawId) -> Self {
        LedgerError::AlreadyExecuted { account, withdraw }
    }

    /// Create a QuorumNotMet error
    pub fn quorum_not_met(
        account: AccountId,
        withdraw: WithdrawId,
        approvals: usize,
        required: usize,
    ) -> Self {
        LedgerError::QuorumNotMet {
            account,
            withdraw,
            approvals,
            required,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountId, balance: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: &str, account: AccountId) -> Self {
        LedgerError::Overflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a Busy error
    pub fn busy(account: AccountId) -> Self {
        LedgerError::Busy { account }
    }

    /// Create a Replay error
    pub fn replay(reason: impl Into<String>) -> Self {
        LedgerError::Replay {
            reason: reason.into(),
        }
    }
}
