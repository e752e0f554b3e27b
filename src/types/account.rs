//! Account and withdrawal-request types
//!
//! This module defines the ledger's current-state data: the [`Account`] with
//! its fixed owner set and balance, and the [`WithdrawalRequest`] records that
//! live inside it. Requests are append-only; once executed they stay in the
//! account permanently as audit records.

use crate::types::identity::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account identifier
///
/// Allocated monotonically by the registry, immutable once assigned.
pub type AccountId = u64;

/// Withdrawal identifier, scoped to one account
///
/// Each account runs its own strictly increasing counter starting at 0.
pub type WithdrawId = u64;

/// Monetary amount in the smallest indivisible currency unit
///
/// All balance arithmetic on amounts is checked; overflow is rejected, never
/// wrapped.
pub type Amount = u128;

/// Lifecycle state of a withdrawal request
///
/// `Executed` is terminal: no transition leaves it, and a request never
/// executes twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawStatus {
    /// Collecting approvals; may still execute
    Pending,
    /// Funds transferred; retained as an audit record
    Executed,
}

/// A pending or executed withdrawal on a shared account
///
/// Created by `request_withdrawal`, mutated only by approval (which grows
/// `approvers`) and execution (which flips `status`). The requester is never
/// a member of `approvers`; their intent is carried by the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    /// Identifier unique within the owning account
    pub id: WithdrawId,
    /// Owner who filed the request
    pub requester: Identity,
    /// Amount to transfer, checked against the balance at execution time only
    pub amount: Amount,
    /// Co-owners who have approved, in approval order, duplicate-free
    pub(crate) approvers: Vec<Identity>,
    /// Current lifecycle state
    pub(crate) status: WithdrawStatus,
}

impl WithdrawalRequest {
    /// Create a fresh pending request with no approvals
    pub(crate) fn new(id: WithdrawId, requester: Identity, amount: Amount) -> Self {
        WithdrawalRequest {
            id,
            requester,
            amount,
            approvers: Vec::new(),
            status: WithdrawStatus::Pending,
        }
    }

    /// Co-owners who have approved, in approval order
    pub fn approvers(&self) -> &[Identity] {
        &self.approvers
    }

    /// Number of distinct approvals collected so far
    pub fn approval_count(&self) -> usize {
        self.approvers.len()
    }

    /// Whether the given identity has already approved
    pub fn has_approved(&self, identity: &Identity) -> bool {
        self.approvers.contains(identity)
    }

    /// Current lifecycle state
    pub fn status(&self) -> WithdrawStatus {
        self.status
    }

    /// Whether this request has reached its terminal state
    pub fn is_executed(&self) -> bool {
        self.status == WithdrawStatus::Executed
    }
}

/// A shared account controlled by a fixed set of co-owners
///
/// The owner set is fixed at creation and duplicate-free; its `Vec` order is
/// the display order handed back to callers. The balance only changes through
/// a deposit or an executed withdrawal and never goes negative (amounts are
/// unsigned and debits are checked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier
    pub id: AccountId,
    /// Co-owners, in creation order, duplicate-free
    pub(crate) owners: Vec<Identity>,
    /// Current balance in smallest currency units
    pub(crate) balance: Amount,
    /// All withdrawal requests ever filed, keyed by id, append-only
    pub(crate) requests: BTreeMap<WithdrawId, WithdrawalRequest>,
    /// Next withdrawal id to hand out on this account
    pub(crate) next_withdraw_id: WithdrawId,
}

impl Account {
    /// Create a new account with a zero balance and no requests
    ///
    /// The caller (the registry) is responsible for having validated the
    /// owner set: non-empty, duplicate-free, within the configured maximum.
    pub fn new(id: AccountId, owners: Vec<Identity>) -> Self {
        Account {
            id,
            owners,
            balance: 0,
            requests: BTreeMap::new(),
            next_withdraw_id: 0,
        }
    }

    /// The owner set, in creation order
    pub fn owners(&self) -> &[Identity] {
        &self.owners
    }

    /// Whether the given identity is one of the account's owners
    pub fn is_owner(&self, identity: &Identity) -> bool {
        self.owners.contains(identity)
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Look up a withdrawal request by id
    pub fn request(&self, withdraw: WithdrawId) -> Option<&WithdrawalRequest> {
        self.requests.get(&withdraw)
    }

    /// All requests ever filed on this account, in id order
    pub fn requests(&self) -> impl Iterator<Item = &WithdrawalRequest> {
        self.requests.values()
    }

    /// Requests still collecting approvals, in id order
    pub fn pending_requests(&self) -> impl Iterator<Item = &WithdrawalRequest> {
        self.requests.values().filter(|r| !r.is_executed())
    }
}
