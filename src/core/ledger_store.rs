//! Keyed per-account lock table
//!
//! This module provides the `LedgerStore`, the exclusive owner of all account
//! state. Accounts live in a `DashMap` keyed by account id, each entry behind
//! its own `parking_lot::Mutex`.
//!
//! # Design
//!
//! The two-level layout (sharded map outside, per-account mutex inside) keeps
//! the map lookup brief: the shard lock is held only long enough to clone the
//! `Arc` out, never across a mutation. Mutations on different accounts
//! therefore proceed without mutual blocking; mutations on the same account
//! serialize on its mutex. There is no global lock.
//!
//! # Bounded waiting
//!
//! Every lock acquisition is bounded by the store's timeout. A caller that
//! cannot acquire an account's mutex in time gets `Busy` back with no partial
//! mutation, so one slow caller cannot starve the rest indefinitely.
//!
//! # Snapshot consistency
//!
//! Reads take the same per-account mutex as writes and copy what they need
//! while holding it, so a query never observes a torn state (for example a
//! debited balance next to a still-pending request).

use crate::types::{Account, AccountId, LedgerError};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Exclusive owner of all account state
///
/// No other component retains a mutable alias to an `Account`; everything
/// goes through the closure-based accessors here.
pub struct LedgerStore {
    /// Accounts keyed by id, each behind its own mutex
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,
    /// Upper bound on any single lock acquisition
    lock_timeout: Duration,
}

impl LedgerStore {
    /// Create an empty store with the given lock-acquisition timeout
    pub fn new(lock_timeout: Duration) -> Self {
        LedgerStore {
            accounts: DashMap::new(),
            lock_timeout,
        }
    }

    /// Insert a freshly created account
    ///
    /// Ids are allocated monotonically by the registry, so an insert never
    /// observes an existing entry.
    pub fn insert(&self, account: Account) {
        self.accounts
            .insert(account.id, Arc::new(Mutex::new(account)));
    }

    /// Whether an account exists under the given id
    pub fn contains(&self, account: AccountId) -> bool {
        self.accounts.contains_key(&account)
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All account ids currently in the store, ascending
    pub fn ids(&self) -> Vec<AccountId> {
        let mut ids: Vec<AccountId> = self.accounts.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Run a mutation against one account under its exclusive lock
    ///
    /// The closure receives the account with the mutex held; no other caller
    /// can observe the account mid-mutation. The closure's own failures
    /// propagate unchanged.
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` if no account exists under `account`
    /// * `Busy` if the lock cannot be acquired within the store's timeout
    pub fn with_mut<T, F>(&self, account: AccountId, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, LedgerError>,
    {
        let entry = self.entry(account)?;
        let mut guard = entry
            .try_lock_for(self.lock_timeout)
            .ok_or_else(|| LedgerError::busy(account))?;
        f(&mut guard)
    }

    /// Run a read against one account under its lock
    ///
    /// Holding the same mutex as mutations is what makes the read a
    /// consistent snapshot; the closure should copy out what it needs and
    /// return quickly.
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` if no account exists under `account`
    /// * `Busy` if the lock cannot be acquired within the store's timeout
    pub fn with_read<T, F>(&self, account: AccountId, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&Account) -> T,
    {
        let entry = self.entry(account)?;
        let guard = entry
            .try_lock_for(self.lock_timeout)
            .ok_or_else(|| LedgerError::busy(account))?;
        Ok(f(&guard))
    }

    /// Clone a full snapshot of one account
    pub fn snapshot(&self, account: AccountId) -> Result<Account, LedgerError> {
        self.with_read(account, |acct| acct.clone())
    }

    /// Clone the `Arc` out of the map, holding the shard lock only briefly
    fn entry(&self, account: AccountId) -> Result<Arc<Mutex<Account>>, LedgerError> {
        self.accounts
            .get(&account)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::account_not_found(account))
    }
}
