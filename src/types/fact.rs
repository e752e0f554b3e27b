//! Audit facts
//!
//! Every successful mutation emits exactly one [`Fact`]: an immutable record
//! carrying a logical timestamp. The fact stream is append-only, externally
//! observable, and sufficient to reconstruct the entire ledger state from
//! empty (see `BankEngine::replay`). The variants mirror the five mutations
//! the engine supports.

use crate::types::account::{AccountId, Amount, WithdrawId};
use crate::types::identity::Identity;
use serde::{Deserialize, Serialize};

/// Logical timestamp assigned by the fact log's global clock
///
/// Strictly increasing across the whole engine; carries no wall-clock
/// meaning.
pub type Timestamp = u64;

/// An immutable record of one successful state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fact", rename_all = "snake_case")]
pub enum Fact {
    /// A new shared account was created
    AccountCreated {
        account: AccountId,
        owners: Vec<Identity>,
        at: Timestamp,
    },
    /// Funds were credited to an account
    Deposited {
        account: AccountId,
        depositor: Identity,
        amount: Amount,
        at: Timestamp,
    },
    /// An owner filed a withdrawal request
    WithdrawalRequested {
        account: AccountId,
        withdraw: WithdrawId,
        requester: Identity,
        amount: Amount,
        at: Timestamp,
    },
    /// A co-owner approved a pending withdrawal
    ///
    /// `approvals` is the count after this approval. Idempotent re-approvals
    /// emit no fact, so replaying never double-counts.
    WithdrawalApproved {
        account: AccountId,
        withdraw: WithdrawId,
        approver: Identity,
        approvals: usize,
        at: Timestamp,
    },
    /// An approved withdrawal was executed and the balance debited
    Withdrawn {
        account: AccountId,
        withdraw: WithdrawId,
        amount: Amount,
        at: Timestamp,
    },
}

impl Fact {
    /// The account this fact belongs to
    pub fn account(&self) -> AccountId {
        match self {
            Fact::AccountCreated { account, .. }
            | Fact::Deposited { account, .. }
            | Fact::WithdrawalRequested { account, .. }
            | Fact::WithdrawalApproved { account, .. }
            | Fact::Withdrawn { account, .. } => *account,
        }
    }

    /// The logical timestamp this fact was recorded at
    pub fn at(&self) -> Timestamp {
        match self {
            Fact::AccountCreated { at, .. }
            | Fact::Deposited { at, .. }
            | Fact::WithdrawalRequested { at, .. }
            | Fact::WithdrawalApproved { at, .. }
            | Fact::Withdrawn { at, .. } => *at,
        }
    }
}
