//! Balance mutations
//!
//! The only two ways an account balance ever changes: a credit from a deposit
//! and a debit from an executed withdrawal. Both validate before they touch
//! the account and use checked arithmetic, so a failed call leaves the
//! balance exactly as it was.

use crate::types::{Account, Amount, LedgerError};

/// Reject non-positive amounts
///
/// Amounts are unsigned, so the only invalid value is zero.
pub fn ensure_positive(amount: Amount) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::invalid_amount(amount));
    }
    Ok(())
}

/// Credit a deposit to the account balance
///
/// # Errors
///
/// Returns `InvalidAmount` for a zero amount and `Overflow` if the credit
/// would exceed the amount type's range. The account is unchanged on error.
pub fn credit(account: &mut Account, amount: Amount) -> Result<(), LedgerError> {
    ensure_positive(amount)?;

    account.balance = account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::overflow("deposit", account.id))?;

    Ok(())
}

/// Debit an executed withdrawal from the account balance
///
/// # Errors
///
/// Returns `InsufficientBalance` if the balance does not cover the amount.
/// The account is unchanged on error.
pub fn debit(account: &mut Account, amount: Amount) -> Result<(), LedgerError> {
    let remaining = account.balance.checked_sub(amount).ok_or_else(|| {
        LedgerError::insufficient_balance(account.id, account.balance, amount)
    })?;

    account.balance = remaining;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Identity;

    fn account() -> Account {
        Account::new(1, vec![Identity::from_bytes([1; Identity::LEN])])
    }

    #[test]
    fn test_credit_increases_balance() {
        let mut acct = account();

        credit(&mut acct, 100).unwrap();
        assert_eq!(acct.balance(), 100);

        credit(&mut acct, 50).unwrap();
        assert_eq!(acct.balance(), 150);
    }

    #[test]
    fn test_credit_rejects_zero_amount() {
        let mut acct = account();

        let result = credit(&mut acct, 0);

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidAmount { amount: 0 }
        ));
        assert_eq!(acct.balance(), 0);
    }

    #[test]
    fn test_credit_rejects_overflow_and_leaves_balance() {
        let mut acct = account();
        acct.balance = Amount::MAX;

        let result = credit(&mut acct, 1);

        assert!(matches!(result.unwrap_err(), LedgerError::Overflow { .. }));
        assert_eq!(acct.balance(), Amount::MAX);
    }

    #[test]
    fn test_debit_decreases_balance() {
        let mut acct = account();
        credit(&mut acct, 100).unwrap();

        debit(&mut acct, 60).unwrap();
        assert_eq!(acct.balance(), 40);
    }

    #[test]
    fn test_debit_can_drain_to_zero() {
        let mut acct = account();
        credit(&mut acct, 100).unwrap();

        debit(&mut acct, 100).unwrap();
        assert_eq!(acct.balance(), 0);
    }

    #[test]
    fn test_debit_rejects_insufficient_balance() {
        let mut acct = account();
        credit(&mut acct, 40).unwrap();

        let result = debit(&mut acct, 1000);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::insufficient_balance(1, 40, 1000)
        );
        assert_eq!(acct.balance(), 40);
    }
}
