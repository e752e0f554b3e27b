//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `identity`: participant identity
//! - `account`: account and withdrawal-request state
//! - `fact`: append-only audit facts
//! - `error`: error types and the retry taxonomy

pub mod account;
pub mod error;
pub mod fact;
pub mod identity;

pub use account::{Account, AccountId, Amount, WithdrawId, WithdrawStatus, WithdrawalRequest};
pub use error::{LedgerError, LedgerErrorKind};
pub use fact::{Fact, Timestamp};
pub use identity::Identity;
