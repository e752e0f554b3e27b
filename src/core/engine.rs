//! Bank engine
//!
//! This module provides the `BankEngine`, the narrow command/query interface
//! the external presentation layer calls into. Commands route through the
//! registry to locate or create the account, then into the ledger store for
//! an atomic mutation; queries read consistent snapshots through the same
//! per-account locks. Every successful mutation records exactly one fact.
//!
//! The engine is `Send + Sync` and designed to be shared behind an `Arc`
//! across many concurrent callers, one per external client.

use crate::core::balance;
use crate::core::facts::FactLog;
use crate::core::ledger_store::LedgerStore;
use crate::core::quorum::{QuorumPolicy, UnanimousOtherOwners};
use crate::core::registry::AccountRegistry;
use crate::core::withdrawal;
use crate::types::{
    Account, AccountId, Amount, Fact, Identity, LedgerError, Timestamp, WithdrawId,
    WithdrawalRequest,
};
use log::debug;
use std::time::Duration;

/// Tunable limits for a [`BankEngine`]
///
/// The defaults mirror the product's original policy: at most 4 owners per
/// account and at most 3 accounts per owner.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Largest allowed owner set, creator included (minimum 1)
    pub max_owners: usize,
    /// Largest number of accounts any identity may co-own (minimum 1)
    pub max_accounts_per_owner: usize,
    /// Upper bound on waiting for a contended account lock
    pub lock_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_owners: 4,
            max_accounts_per_owner: 3,
            lock_timeout: Duration::from_millis(200),
        }
    }
}

/// The ledger core's command/query interface
///
/// Owns the ledger store, the account registry, the fact log, and the quorum
/// policy. All methods take `&self`; internal synchronization is per-account,
/// so commands against different accounts never serialize against each other.
pub struct BankEngine {
    store: LedgerStore,
    registry: AccountRegistry,
    facts: FactLog,
    quorum: Box<dyn QuorumPolicy>,
    config: EngineConfig,
}

impl std::fmt::Debug for BankEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankEngine").finish_non_exhaustive()
    }
}

impl BankEngine {
    /// Create an engine with default limits and the unanimous-minus-requester
    /// quorum policy
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom limits
    ///
    /// Zero limits are clamped to 1 rather than rejected; a bank where no
    /// account can exist is never what a caller meant.
    pub fn with_config(config: EngineConfig) -> Self {
        let config = EngineConfig {
            max_owners: config.max_owners.max(1),
            max_accounts_per_owner: config.max_accounts_per_owner.max(1),
            ..config
        };
        BankEngine {
            store: LedgerStore::new(config.lock_timeout),
            registry: AccountRegistry::new(config.max_owners, config.max_accounts_per_owner),
            facts: FactLog::new(),
            quorum: Box::new(UnanimousOtherOwners),
            config,
        }
    }

    /// Replace the quorum policy
    ///
    /// The default is [`UnanimousOtherOwners`]; any [`QuorumPolicy`] can be
    /// substituted without touching the workflow.
    pub fn with_quorum_policy(mut self, policy: impl QuorumPolicy + 'static) -> Self {
        self.quorum = Box::new(policy);
        self
    }

    /// The limits this engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Create a shared account owned by `creator` and `other_owners`
    ///
    /// The new account starts with a zero balance and no requests. The owner
    /// set is `creator` first, then `other_owners` in their given order, and
    /// is fixed for the account's lifetime.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOwners` if the owner set is malformed (creator
    /// duplicated, duplicate owners, too many owners) or any owner is at
    /// their account quota.
    pub fn create_account(
        &self,
        creator: Identity,
        other_owners: &[Identity],
    ) -> Result<AccountId, LedgerError> {
        let (account, owners) = self.registry.create(creator, other_owners)?;

        self.facts.record(|at| Fact::AccountCreated {
            account,
            owners: owners.clone(),
            at,
        });
        self.store.insert(Account::new(account, owners));

        debug!("created account {account} for {creator}");
        Ok(account)
    }

    /// Deposit funds into an account
    ///
    /// Deposits carry no authorization check beyond account existence: any
    /// identity may pay into any account, the way anyone can pay cash into a
    /// shared account.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `InvalidAmount` (zero), `Overflow`, `Busy`.
    pub fn deposit(
        &self,
        account: AccountId,
        depositor: Identity,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.store.with_mut(account, |acct| {
            balance::credit(acct, amount)?;
            self.facts.record(|at| Fact::Deposited {
                account,
                depositor,
                amount,
                at,
            });
            Ok(())
        })?;

        debug!("deposited {amount} into account {account}");
        Ok(())
    }

    /// File a withdrawal request as an owner
    ///
    /// The amount may exceed the current balance; sufficiency is checked at
    /// execution time only. Returns the fresh withdrawal id, scoped to the
    /// account.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `NotAnOwner`, `InvalidAmount`, `Busy`.
    pub fn request_withdrawal(
        &self,
        account: AccountId,
        requester: Identity,
        amount: Amount,
    ) -> Result<WithdrawId, LedgerError> {
        let withdraw = self.store.with_mut(account, |acct| {
            let withdraw = withdrawal::request(acct, requester, amount)?;
            self.facts.record(|at| Fact::WithdrawalRequested {
                account,
                withdraw,
                requester,
                amount,
                at,
            });
            Ok(withdraw)
        })?;

        debug!("withdrawal {withdraw} for {amount} requested on account {account}");
        Ok(withdraw)
    }

    /// Approve a pending withdrawal as a co-owner
    ///
    /// Returns the number of distinct approvals after this call. Idempotent:
    /// re-approving returns the current count, mutates nothing, and records
    /// no fact, so a caller retrying after a timeout cannot double-count.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `RequestNotFound`, `NotAnOwner`, `AlreadyExecuted`,
    /// `SelfApprovalNotAllowed`, `Busy`.
    pub fn approve_withdrawal(
        &self,
        account: AccountId,
        withdraw: WithdrawId,
        approver: Identity,
    ) -> Result<usize, LedgerError> {
        let approval = self.store.with_mut(account, |acct| {
            let approval = withdrawal::approve(acct, withdraw, approver)?;
            if approval.newly_added {
                self.facts.record(|at| Fact::WithdrawalApproved {
                    account,
                    withdraw,
                    approver,
                    approvals: approval.count,
                    at,
                });
            }
            Ok(approval)
        })?;

        debug!(
            "withdrawal {withdraw} on account {account} now has {} approvals",
            approval.count
        );
        Ok(approval.count)
    }

    /// Execute an approved withdrawal, transferring its amount out
    ///
    /// Any owner may trigger execution once quorum is met and the balance
    /// covers the amount. The quorum check, balance check, debit, and status
    /// flip happen as one atomic step under the account's lock.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `RequestNotFound`, `AlreadyExecuted`, `NotAnOwner`,
    /// `QuorumNotMet`, `InsufficientBalance`, `Busy`.
    pub fn execute_withdrawal(
        &self,
        account: AccountId,
        withdraw: WithdrawId,
        caller: Identity,
    ) -> Result<Amount, LedgerError> {
        let amount = self.store.with_mut(account, |acct| {
            let amount = withdrawal::execute(acct, withdraw, caller, self.quorum.as_ref())?;
            self.facts.record(|at| Fact::Withdrawn {
                account,
                withdraw,
                amount,
                at,
            });
            Ok(amount)
        })?;

        debug!("withdrawal {withdraw} executed on account {account}, transferred {amount}");
        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Accounts the identity co-owns, in creation order
    ///
    /// Never fails; an unknown identity gets an empty list.
    pub fn accounts_of(&self, identity: &Identity) -> Vec<AccountId> {
        self.registry.accounts_of(identity)
    }

    /// The account's owner set, in creation order
    pub fn owners(&self, account: AccountId) -> Result<Vec<Identity>, LedgerError> {
        self.store.with_read(account, |acct| acct.owners().to_vec())
    }

    /// The account's current balance
    pub fn balance(&self, account: AccountId) -> Result<Amount, LedgerError> {
        self.store.with_read(account, |acct| acct.balance())
    }

    /// Number of distinct approvals on a withdrawal request
    pub fn approvals(
        &self,
        account: AccountId,
        withdraw: WithdrawId,
    ) -> Result<usize, LedgerError> {
        self.store.with_read(account, |acct| {
            acct.request(withdraw)
                .map(|req| req.approval_count())
                .ok_or_else(|| LedgerError::request_not_found(account, withdraw))
        })?
    }

    /// The identities that approved a withdrawal request, in approval order
    ///
    /// The original interface exposed only a count; the identities are
    /// exposed here as well since hiding them would weaken auditability.
    pub fn approvers(
        &self,
        account: AccountId,
        withdraw: WithdrawId,
    ) -> Result<Vec<Identity>, LedgerError> {
        self.store.with_read(account, |acct| {
            acct.request(withdraw)
                .map(|req| req.approvers().to_vec())
                .ok_or_else(|| LedgerError::request_not_found(account, withdraw))
        })?
    }

    /// Snapshots of the account's still-pending withdrawal requests, in id
    /// order
    pub fn pending_withdrawals(
        &self,
        account: AccountId,
    ) -> Result<Vec<WithdrawalRequest>, LedgerError> {
        self.store
            .with_read(account, |acct| acct.pending_requests().cloned().collect())
    }

    /// Approvals required for a withdrawal on this account under the current
    /// quorum policy
    pub fn required_approvals(&self, account: AccountId) -> Result<usize, LedgerError> {
        self.store.with_read(account, |acct| {
            self.quorum.required_approvals(acct.owners().len())
        })
    }

    /// A full consistent snapshot of one account
    pub fn account(&self, account: AccountId) -> Result<Account, LedgerError> {
        self.store.snapshot(account)
    }

    // ------------------------------------------------------------------
    // Fact stream
    // ------------------------------------------------------------------

    /// Copy of the full fact stream, in timestamp order
    pub fn facts(&self) -> Vec<Fact> {
        self.facts.snapshot()
    }

    /// Copy of all facts recorded after the given timestamp
    pub fn facts_since(&self, after: Timestamp) -> Vec<Fact> {
        self.facts.since(after)
    }

    /// Reconstruct an engine from a fact stream, using default limits
    ///
    /// Replaying the facts of an engine yields an engine with the same
    /// accounts, balances, requests, and fact stream.
    pub fn replay(facts: &[Fact]) -> Result<Self, LedgerError> {
        Self::replay_with_config(EngineConfig::default(), facts)
    }

    /// Reconstruct an engine from a fact stream with custom limits
    ///
    /// Creation-time quotas are not re-checked: the stream was valid when it
    /// was recorded, possibly under different limits.
    ///
    /// # Errors
    ///
    /// Returns `Replay` if the stream is not a prefix-consistent history
    /// (a fact references an account or request that does not exist yet, a
    /// creation repeats, or a debit does not fit the balance).
    pub fn replay_with_config(config: EngineConfig, facts: &[Fact]) -> Result<Self, LedgerError> {
        let engine = Self::with_config(config);
        for fact in facts {
            engine.apply_replayed(fact)?;
            engine.facts.append_replayed(fact.clone());
        }
        debug!("replayed {} facts into a fresh engine", facts.len());
        Ok(engine)
    }

    fn apply_replayed(&self, fact: &Fact) -> Result<(), LedgerError> {
        match fact {
            Fact::AccountCreated {
                account, owners, ..
            } => {
                if self.store.contains(*account) {
                    return Err(LedgerError::replay(format!(
                        "account {account} created twice"
                    )));
                }
                if owners.is_empty() {
                    return Err(LedgerError::replay(format!(
                        "account {account} created with no owners"
                    )));
                }
                self.registry.register_replayed(*account, owners);
                self.store.insert(Account::new(*account, owners.clone()));
                Ok(())
            }
            Fact::Deposited {
                account, amount, ..
            } => self
                .store
                .with_mut(*account, |acct| balance::credit(acct, *amount))
                .map_err(Self::replay_error),
            Fact::WithdrawalRequested {
                account,
                withdraw,
                requester,
                amount,
                ..
            } => self
                .store
                .with_mut(*account, |acct| {
                    if acct.requests.contains_key(withdraw) {
                        return Err(LedgerError::replay(format!(
                            "withdrawal {withdraw} on account {account} requested twice"
                        )));
                    }
                    acct.requests.insert(
                        *withdraw,
                        WithdrawalRequest::new(*withdraw, *requester, *amount),
                    );
                    acct.next_withdraw_id = acct.next_withdraw_id.max(withdraw + 1);
                    Ok(())
                })
                .map_err(Self::replay_error),
            Fact::WithdrawalApproved {
                account,
                withdraw,
                approver,
                ..
            } => self
                .store
                .with_mut(*account, |acct| {
                    let req = acct.requests.get_mut(withdraw).ok_or_else(|| {
                        LedgerError::replay(format!(
                            "approval for unknown withdrawal {withdraw} on account {account}"
                        ))
                    })?;
                    if !req.approvers.contains(approver) {
                        req.approvers.push(*approver);
                    }
                    Ok(())
                })
                .map_err(Self::replay_error),
            Fact::Withdrawn {
                account,
                withdraw,
                amount,
                ..
            } => self
                .store
                .with_mut(*account, |acct| {
                    let req = acct.requests.get_mut(withdraw).ok_or_else(|| {
                        LedgerError::replay(format!(
                            "execution of unknown withdrawal {withdraw} on account {account}"
                        ))
                    })?;
                    req.status = crate::types::WithdrawStatus::Executed;
                    balance::debit(acct, *amount)
                })
                .map_err(Self::replay_error),
        }
    }

    /// Wrap store and balance failures in `Replay`, keeping replay's own
    /// errors as they are
    fn replay_error(error: LedgerError) -> LedgerError {
        match error {
            LedgerError::Replay { .. } => error,
            other => LedgerError::replay(other.to_string()),
        }
    }
}

impl Default for BankEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quorum::FixedThreshold;

    fn ident(n: u8) -> Identity {
        Identity::from_bytes([n; Identity::LEN])
    }

    /// Engine with one three-owner account (owners 1, 2, 3)
    fn engine_with_account() -> (BankEngine, AccountId) {
        let engine = BankEngine::new();
        let account = engine
            .create_account(ident(1), &[ident(2), ident(3)])
            .unwrap();
        (engine, account)
    }

    #[test]
    fn test_create_account_starts_empty() {
        let (engine, account) = engine_with_account();

        assert_eq!(engine.balance(account).unwrap(), 0);
        assert_eq!(
            engine.owners(account).unwrap(),
            vec![ident(1), ident(2), ident(3)]
        );
        assert!(engine.pending_withdrawals(account).unwrap().is_empty());
    }

    #[test]
    fn test_create_account_indexes_every_owner() {
        let (engine, account) = engine_with_account();

        for n in 1..=3 {
            assert_eq!(engine.accounts_of(&ident(n)), vec![account]);
        }
        assert!(engine.accounts_of(&ident(9)).is_empty());
    }

    #[test]
    fn test_deposit_requires_no_ownership() {
        let (engine, account) = engine_with_account();

        // Identity 9 is a stranger to the account.
        engine.deposit(account, ident(9), 100).unwrap();

        assert_eq!(engine.balance(account).unwrap(), 100);
    }

    #[test]
    fn test_deposit_unknown_account() {
        let engine = BankEngine::new();

        let result = engine.deposit(42, ident(1), 100);
        assert_eq!(result.unwrap_err(), LedgerError::account_not_found(42));
    }

    #[test]
    fn test_queries_resolve_not_found_like_writes() {
        let (engine, account) = engine_with_account();

        assert_eq!(
            engine.balance(99).unwrap_err(),
            LedgerError::account_not_found(99)
        );
        assert_eq!(
            engine.owners(99).unwrap_err(),
            LedgerError::account_not_found(99)
        );
        assert_eq!(
            engine.approvals(account, 7).unwrap_err(),
            LedgerError::request_not_found(account, 7)
        );
        assert_eq!(
            engine.approvers(account, 7).unwrap_err(),
            LedgerError::request_not_found(account, 7)
        );
    }

    #[test]
    fn test_full_withdrawal_lifecycle() {
        let (engine, account) = engine_with_account();
        engine.deposit(account, ident(1), 100).unwrap();

        let withdraw = engine.request_withdrawal(account, ident(1), 60).unwrap();
        assert_eq!(engine.approvals(account, withdraw).unwrap(), 0);

        assert_eq!(
            engine
                .approve_withdrawal(account, withdraw, ident(2))
                .unwrap(),
            1
        );
        assert_eq!(
            engine
                .approve_withdrawal(account, withdraw, ident(3))
                .unwrap(),
            2
        );

        let transferred = engine
            .execute_withdrawal(account, withdraw, ident(1))
            .unwrap();
        assert_eq!(transferred, 60);
        assert_eq!(engine.balance(account).unwrap(), 40);
    }

    #[test]
    fn test_withdraw_ids_are_scoped_per_account() {
        let engine = BankEngine::new();
        let a = engine.create_account(ident(1), &[ident(2)]).unwrap();
        let b = engine.create_account(ident(3), &[ident(4)]).unwrap();

        let wa = engine.request_withdrawal(a, ident(1), 10).unwrap();
        let wb = engine.request_withdrawal(b, ident(3), 10).unwrap();

        // Both accounts start their own counter at zero.
        assert_eq!(wa, 0);
        assert_eq!(wb, 0);
    }

    #[test]
    fn test_approvers_are_exposed_in_approval_order() {
        let (engine, account) = engine_with_account();
        let withdraw = engine.request_withdrawal(account, ident(1), 10).unwrap();

        engine
            .approve_withdrawal(account, withdraw, ident(3))
            .unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();

        assert_eq!(
            engine.approvers(account, withdraw).unwrap(),
            vec![ident(3), ident(2)]
        );
    }

    #[test]
    fn test_pending_withdrawals_drop_executed_requests() {
        let (engine, account) = engine_with_account();
        engine.deposit(account, ident(1), 100).unwrap();

        let first = engine.request_withdrawal(account, ident(1), 60).unwrap();
        let second = engine.request_withdrawal(account, ident(2), 30).unwrap();

        engine.approve_withdrawal(account, first, ident(2)).unwrap();
        engine.approve_withdrawal(account, first, ident(3)).unwrap();
        engine.execute_withdrawal(account, first, ident(1)).unwrap();

        let pending = engine.pending_withdrawals(account).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second);
    }

    #[test]
    fn test_required_approvals_reflects_policy() {
        let (engine, account) = engine_with_account();
        assert_eq!(engine.required_approvals(account).unwrap(), 2);

        let engine = BankEngine::new().with_quorum_policy(FixedThreshold::new(1));
        let account = engine
            .create_account(ident(1), &[ident(2), ident(3)])
            .unwrap();
        assert_eq!(engine.required_approvals(account).unwrap(), 1);
    }

    #[test]
    fn test_custom_quorum_policy_changes_execution() {
        let engine = BankEngine::new().with_quorum_policy(FixedThreshold::new(1));
        let account = engine
            .create_account(ident(1), &[ident(2), ident(3)])
            .unwrap();
        engine.deposit(account, ident(1), 100).unwrap();

        let withdraw = engine.request_withdrawal(account, ident(1), 60).unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();

        // One approval is enough under the fixed threshold.
        let transferred = engine
            .execute_withdrawal(account, withdraw, ident(1))
            .unwrap();
        assert_eq!(transferred, 60);
    }

    #[test]
    fn test_every_mutation_records_one_fact() {
        let (engine, account) = engine_with_account();
        engine.deposit(account, ident(1), 100).unwrap();
        let withdraw = engine.request_withdrawal(account, ident(1), 60).unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(3))
            .unwrap();
        engine
            .execute_withdrawal(account, withdraw, ident(1))
            .unwrap();

        let facts = engine.facts();
        assert_eq!(facts.len(), 5);
        assert!(matches!(facts[0], Fact::AccountCreated { .. }));
        assert!(matches!(facts[1], Fact::Deposited { .. }));
        assert!(matches!(facts[2], Fact::WithdrawalRequested { .. }));
        assert!(matches!(facts[3], Fact::WithdrawalApproved { .. }));
        assert!(matches!(facts[4], Fact::Withdrawn { .. }));
    }

    #[test]
    fn test_idempotent_approval_records_no_fact() {
        let (engine, account) = engine_with_account();
        let withdraw = engine.request_withdrawal(account, ident(1), 60).unwrap();

        engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();
        let before = engine.facts().len();

        let count = engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(engine.facts().len(), before);
    }

    #[test]
    fn test_failed_command_records_no_fact() {
        let (engine, account) = engine_with_account();
        let before = engine.facts().len();

        engine.deposit(account, ident(1), 0).unwrap_err();
        engine
            .request_withdrawal(account, ident(9), 10)
            .unwrap_err();
        engine.execute_withdrawal(account, 42, ident(1)).unwrap_err();

        assert_eq!(engine.facts().len(), before);
    }

    #[test]
    fn test_facts_since_supports_incremental_polling() {
        let (engine, account) = engine_with_account();
        let seen = engine.facts().last().unwrap().at();

        engine.deposit(account, ident(1), 100).unwrap();

        let fresh = engine.facts_since(seen);
        assert_eq!(fresh.len(), 1);
        assert!(matches!(fresh[0], Fact::Deposited { .. }));
    }

    #[test]
    fn test_replay_reconstructs_state() {
        let (engine, account) = engine_with_account();
        engine.deposit(account, ident(1), 100).unwrap();
        let withdraw = engine.request_withdrawal(account, ident(1), 60).unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(2))
            .unwrap();
        engine
            .approve_withdrawal(account, withdraw, ident(3))
            .unwrap();
        engine
            .execute_withdrawal(account, withdraw, ident(1))
            .unwrap();

        let replayed = BankEngine::replay(&engine.facts()).unwrap();

        assert_eq!(replayed.balance(account).unwrap(), 40);
        assert_eq!(
            replayed.owners(account).unwrap(),
            engine.owners(account).unwrap()
        );
        assert_eq!(replayed.accounts_of(&ident(2)), vec![account]);
        assert_eq!(replayed.approvals(account, withdraw).unwrap(), 2);
        assert!(replayed
            .account(account)
            .unwrap()
            .request(withdraw)
            .unwrap()
            .is_executed());
        assert_eq!(replayed.facts(), engine.facts());
    }

    #[test]
    fn test_replayed_engine_continues_allocating_fresh_ids() {
        let (engine, account) = engine_with_account();
        engine.request_withdrawal(account, ident(1), 10).unwrap();

        let replayed = BankEngine::replay(&engine.facts()).unwrap();

        let next_withdraw = replayed.request_withdrawal(account, ident(2), 20).unwrap();
        assert_eq!(next_withdraw, 1);

        let next_account = replayed.create_account(ident(8), &[]).unwrap();
        assert_eq!(next_account, account + 1);
    }

    #[test]
    fn test_replay_rejects_inconsistent_stream() {
        let orphan_deposit = vec![Fact::Deposited {
            account: 5,
            depositor: ident(1),
            amount: 10,
            at: 1,
        }];

        let result = BankEngine::replay(&orphan_deposit);
        assert!(matches!(result.unwrap_err(), LedgerError::Replay { .. }));
    }

    #[test]
    fn test_config_clamps_zero_limits() {
        let engine = BankEngine::with_config(EngineConfig {
            max_owners: 0,
            max_accounts_per_owner: 0,
            ..EngineConfig::default()
        });

        assert_eq!(engine.config().max_owners, 1);
        assert_eq!(engine.config().max_accounts_per_owner, 1);
        engine.create_account(ident(1), &[]).unwrap();
    }
}
