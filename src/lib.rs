//! Multisig Bank Ledger Library
//! # Overview
//!
//! This library provides the core of a multi-owner account ledger with
//! quorum-gated withdrawals: a shared account is controlled by a fixed set of
//! co-owners, anyone may deposit, any owner may request a withdrawal, and the
//! withdrawal executes only once enough other owners have approved it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Identity, Account, WithdrawalRequest, Fact, errors)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The command/query interface the presentation layer calls
//!   - [`core::ledger_store`] - Keyed per-account lock table owning all account state
//!   - [`core::registry`] - Account creation and the per-owner account index
//!   - [`core::withdrawal`] - The request/approve/execute state machine
//!   - [`core::quorum`] - Replaceable quorum policies
//!   - [`core::facts`] - The append-only, replayable audit log
//!
//! # Commands and Queries
//!
//! The engine supports five commands, each emitting one audit fact on
//! success:
//!
//! - **CreateAccount**: register a shared account with a fixed owner set
//! - **Deposit**: credit funds (no ownership required)
//! - **RequestWithdrawal**: file a withdrawal as an owner
//! - **ApproveWithdrawal**: approve a co-owner's withdrawal (idempotent)
//! - **ExecuteWithdrawal**: debit the balance once quorum is met
//!
//! Queries (owners, balance, approvals, approvers, pending withdrawals,
//! accounts per identity) read consistent snapshots and never mutate.
//!
//! # Concurrency
//!
//! The engine takes `&self` everywhere and is meant to be shared behind an
//! `Arc` by many concurrent callers. Mutations on the same account serialize
//! on that account's lock with a bounded wait; mutations on different
//! accounts proceed in parallel. See [`core::ledger_store`] for the locking
//! model.
//!
//! # Example
//!
//! ```
//! use multisig_bank::{BankEngine, Identity};
//!
//! let alice = Identity::from_bytes([1; 20]);
//! let bob = Identity::from_bytes([2; 20]);
//!
//! let engine = BankEngine::new();
//! let account = engine.create_account(alice, &[bob])?;
//! engine.deposit(account, alice, 100)?;
//!
//! let withdraw = engine.request_withdrawal(account, alice, 60)?;
//! engine.approve_withdrawal(account, withdraw, bob)?;
//! let transferred = engine.execute_withdrawal(account, withdraw, alice)?;
//!
//! assert_eq!(transferred, 60);
//! assert_eq!(engine.balance(account)?, 40);
//! # Ok::<(), multisig_bank::LedgerError>(())
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::{
    AccountRegistry, BankEngine, EngineConfig, FactLog, FixedThreshold, LedgerStore, QuorumPolicy,
    UnanimousOtherOwners,
};
pub use types::{
    Account, AccountId, Amount, Fact, Identity, LedgerError, LedgerErrorKind, Timestamp,
    WithdrawId, WithdrawStatus, WithdrawalRequest,
};
