//! Withdrawal workflow state machine
//!
//! The request / approve / execute lifecycle, written as pure functions over
//! a mutably borrowed [`Account`]. The engine calls these while holding the
//! account's lock, which is what makes each transition atomic: the quorum and
//! balance checks and the resulting mutation happen under one critical
//! section, so no caller can observe a half-applied execution.
//!
//! # State machine
//!
//! ```text
//! Pending --approve-->* Pending --execute--> Executed
//! ```
//!
//! `Executed` is terminal. Approvals are idempotent: re-approving returns the
//! current count without growing it. Self-approval is rejected; the
//! requester's intent is already carried by the request.

use crate::core::balance;
use crate::core::quorum::QuorumPolicy;
use crate::types::{Account, Amount, Identity, LedgerError, WithdrawId, WithdrawalRequest};

/// Outcome of an approval attempt
///
/// Distinguishes a fresh approval from an idempotent replay so the engine
/// knows whether to emit a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    /// Distinct approvals on the request after this call
    pub count: usize,
    /// Whether this call added a new approver (false on idempotent replay)
    pub newly_added: bool,
}

/// File a new withdrawal request on the account
///
/// The amount may exceed the current balance; sufficiency is checked only at
/// execution time, since the balance can change in between. The withdrawal id
/// is scoped to the account and strictly increasing.
///
/// # Errors
///
/// * `NotAnOwner` if `requester` is not an owner of the account
/// * `InvalidAmount` if `amount` is zero
pub fn request(
    account: &mut Account,
    requester: Identity,
    amount: Amount,
) -> Result<WithdrawId, LedgerError> {
    if !account.is_owner(&requester) {
        return Err(LedgerError::not_an_owner(account.id, requester));
    }
    balance::ensure_positive(amount)?;

    let withdraw = account.next_withdraw_id;
    account.next_withdraw_id += 1;
    account
        .requests
        .insert(withdraw, WithdrawalRequest::new(withdraw, requester, amount));

    Ok(withdraw)
}

/// Approve a pending withdrawal as a co-owner
///
/// Idempotent: an approver already on the request gets the current count back
/// with `newly_added = false` and the request unchanged.
///
/// # Errors
///
/// * `RequestNotFound` if no such withdrawal exists on the account
/// * `NotAnOwner` if `approver` is not an owner of the account
/// * `AlreadyExecuted` if the request has reached its terminal state
/// * `SelfApprovalNotAllowed` if `approver` filed the request
pub fn approve(
    account: &mut Account,
    withdraw: WithdrawId,
    approver: Identity,
) -> Result<Approval, LedgerError> {
    let account_id = account.id;
    if !account.requests.contains_key(&withdraw) {
        return Err(LedgerError::request_not_found(account_id, withdraw));
    }
    if !account.is_owner(&approver) {
        return Err(LedgerError::not_an_owner(account_id, approver));
    }

    // contains_key above makes this infallible; re-borrow mutably.
    let req = account
        .requests
        .get_mut(&withdraw)
        .ok_or_else(|| LedgerError::request_not_found(account_id, withdraw))?;

    if req.is_executed() {
        return Err(LedgerError::already_executed(account_id, withdraw));
    }
    if req.requester == approver {
        return Err(LedgerError::self_approval(account_id, withdraw));
    }
    if req.has_approved(&approver) {
        return Ok(Approval {
            count: req.approval_count(),
            newly_added: false,
        });
    }

    req.approvers.push(approver);
    Ok(Approval {
        count: req.approval_count(),
        newly_added: true,
    })
}

/// Execute an approved withdrawal, debiting the balance
///
/// Any owner may trigger execution, not just the requester. Checks run in a
/// fixed order: existence, terminal status, authorization, quorum, balance.
/// Only when all pass does the mutation happen, still inside the caller's
/// critical section.
///
/// # Errors
///
/// * `RequestNotFound` if no such withdrawal exists on the account
/// * `AlreadyExecuted` if the request was already executed
/// * `NotAnOwner` if `caller` is not an owner of the account
/// * `QuorumNotMet` if too few co-owners have approved
/// * `InsufficientBalance` if the balance does not cover the amount
pub fn execute(
    account: &mut Account,
    withdraw: WithdrawId,
    caller: Identity,
    policy: &dyn QuorumPolicy,
) -> Result<Amount, LedgerError> {
    let account_id = account.id;

    let (amount, approvals) = {
        let req = account
            .requests
            .get(&withdraw)
            .ok_or_else(|| LedgerError::request_not_found(account_id, withdraw))?;
        if req.is_executed() {
            return Err(LedgerError::already_executed(account_id, withdraw));
        }
        (req.amount, req.approval_count())
    };

    if !account.is_owner(&caller) {
        return Err(LedgerError::not_an_owner(account_id, caller));
    }

    let required = policy.required_approvals(account.owners.len());
    if approvals < required {
        return Err(LedgerError::quorum_not_met(
            account_id, withdraw, approvals, required,
        ));
    }

    balance::debit(account, amount)?;

    if let Some(req) = account.requests.get_mut(&withdraw) {
        req.status = crate::types::WithdrawStatus::Executed;
    }

    Ok(amount)
}
