//! Account registry
//!
//! Validates owner sets, allocates account identifiers, and maintains the
//! identity to account-ids index used by `accounts_of`. The index is derived
//! data, not a source of truth: it can always be rebuilt by replaying
//! `AccountCreated` facts, which is exactly what `register_replayed` does.

use crate::types::{AccountId, Identity, LedgerError};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates accounts and indexes them per owner identity
pub struct AccountRegistry {
    /// Next account id to hand out; strictly increasing
    next_id: AtomicU64,
    /// Derived index: identity to the accounts it co-owns, in creation order
    index: DashMap<Identity, Vec<AccountId>>,
    /// Largest allowed owner set, creator included
    max_owners: usize,
    /// Largest number of accounts any single identity may co-own
    max_accounts_per_owner: usize,
    /// Serializes creations so the per-owner quota check and the index
    /// update are one atomic step. Creation is rare next to per-account
    /// commands, which never take this lock.
    creation: Mutex<()>,
}

impl AccountRegistry {
    /// Create a registry with the given owner-set limits
    pub fn new(max_owners: usize, max_accounts_per_owner: usize) -> Self {
        AccountRegistry {
            next_id: AtomicU64::new(0),
            index: DashMap::new(),
            max_owners,
            max_accounts_per_owner,
            creation: Mutex::new(()),
        }
    }

    /// Validate an owner set, allocate a fresh id, and index the account
    ///
    /// The returned owner list is `creator` followed by `other_owners` in
    /// their given order; that order is what `owners` queries hand back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOwners` if `other_owners` contains the creator or a
    /// duplicate, if the resulting owner count exceeds the configured
    /// maximum, or if any owner already co-owns the maximum number of
    /// accounts.
    pub fn create(
        &self,
        creator: Identity,
        other_owners: &[Identity],
    ) -> Result<(AccountId, Vec<Identity>), LedgerError> {
        let owners = self.validate_owners(creator, other_owners)?;

        let _guard = self.creation.lock();

        for owner in &owners {
            let held = self.index.get(owner).map_or(0, |ids| ids.len());
            if held >= self.max_accounts_per_owner {
                return Err(LedgerError::invalid_owners(format!(
                    "{} already co-owns the maximum of {} accounts",
                    owner, self.max_accounts_per_owner
                )));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        for owner in &owners {
            self.index.entry(*owner).or_insert_with(Vec::new).push(id);
        }

        Ok((id, owners))
    }

    /// Re-index an account from a replayed `AccountCreated` fact
    ///
    /// Skips the quota checks: the stream being replayed was valid when it
    /// was recorded, possibly under different limits. Advances the id
    /// allocator past the replayed id.
    pub fn register_replayed(&self, id: AccountId, owners: &[Identity]) {
        let _guard = self.creation.lock();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        for owner in owners {
            self.index.entry(*owner).or_insert_with(Vec::new).push(id);
        }
    }

    /// Accounts the identity co-owns, in creation order
    ///
    /// Never fails; an identity with no accounts gets an empty list.
    pub fn accounts_of(&self, identity: &Identity) -> Vec<AccountId> {
        self.index
            .get(identity)
            .map(|ids| ids.value().clone())
            .unwrap_or_default()
    }

    fn validate_owners(
        &self,
        creator: Identity,
        other_owners: &[Identity],
    ) -> Result<Vec<Identity>, LedgerError> {
        if other_owners.contains(&creator) {
            return Err(LedgerError::invalid_owners(format!(
                "creator {} listed among the other owners",
                creator
            )));
        }

        for (i, owner) in other_owners.iter().enumerate() {
            if other_owners[..i].contains(owner) {
                return Err(LedgerError::invalid_owners(format!(
                    "duplicate owner {}",
                    owner
                )));
            }
        }

        let count = other_owners.len() + 1;
        if count > self.max_owners {
            return Err(LedgerError::invalid_owners(format!(
                "maximum of {} owners per account, got {}",
                self.max_owners, count
            )));
        }

        let mut owners = Vec::with_capacity(count);
        owners.push(creator);
        owners.extend_from_slice(other_owners);
        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(n: u8) -> Identity {
        Identity::from_bytes([n; Identity::LEN])
    }

    fn registry() -> AccountRegistry {
        AccountRegistry::new(4, 3)
    }

    #[test]
    fn test_create_allocates_increasing_ids() {
        let reg = registry();

        let (a, _) = reg.create(ident(1), &[]).unwrap();
        let (b, _) = reg.create(ident(2), &[]).unwrap();
        let (c, _) = reg.create(ident(3), &[]).unwrap();

        assert_eq!((a, b, c), (0, 1, 2));
    }

    #[test]
    fn test_create_puts_creator_first() {
        let reg = registry();

        let (_, owners) = reg.create(ident(1), &[ident(2), ident(3)]).unwrap();

        assert_eq!(owners, vec![ident(1), ident(2), ident(3)]);
    }

    #[test]
    fn test_create_rejects_creator_in_other_owners() {
        let reg = registry();

        let result = reg.create(ident(1), &[ident(2), ident(1)]);

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidOwners { .. }
        ));
    }

    #[test]
    fn test_create_rejects_duplicate_other_owner() {
        let reg = registry();

        let result = reg.create(ident(1), &[ident(2), ident(2)]);

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidOwners { .. }
        ));
    }

    #[test]
    fn test_create_rejects_owner_count_above_maximum() {
        let reg = registry();

        // 4 others + creator = 5 > 4
        let result = reg.create(ident(1), &[ident(2), ident(3), ident(4), ident(5)]);

        let err = result.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidOwners { .. }));
        assert!(err.to_string().contains("maximum of 4 owners"));
    }

    #[test]
    fn test_create_accepts_owner_count_at_maximum() {
        let reg = registry();

        let result = reg.create(ident(1), &[ident(2), ident(3), ident(4)]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_sole_owner_account_is_valid() {
        let reg = registry();

        let (_, owners) = reg.create(ident(1), &[]).unwrap();
        assert_eq!(owners, vec![ident(1)]);
    }

    #[test]
    fn test_per_owner_account_quota() {
        let reg = registry();

        for _ in 0..3 {
            reg.create(ident(1), &[]).unwrap();
        }

        // Fourth account for the same identity, even as a co-owner.
        let result = reg.create(ident(2), &[ident(1)]);

        let err = result.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidOwners { .. }));
        assert!(err.to_string().contains("maximum of 3 accounts"));

        // The failed creation must not have touched the index.
        assert!(reg.accounts_of(&ident(2)).is_empty());
        assert_eq!(reg.accounts_of(&ident(1)).len(), 3);
    }

    #[test]
    fn test_accounts_of_lists_in_creation_order() {
        let reg = registry();

        let (a, _) = reg.create(ident(1), &[ident(2)]).unwrap();
        let (b, _) = reg.create(ident(3), &[ident(1)]).unwrap();
        let (c, _) = reg.create(ident(1), &[]).unwrap();

        assert_eq!(reg.accounts_of(&ident(1)), vec![a, b, c]);
        assert_eq!(reg.accounts_of(&ident(2)), vec![a]);
        assert_eq!(reg.accounts_of(&ident(9)), Vec::<AccountId>::new());
    }

    #[test]
    fn test_register_replayed_advances_allocator() {
        let reg = registry();

        reg.register_replayed(7, &[ident(1), ident(2)]);

        assert_eq!(reg.accounts_of(&ident(1)), vec![7]);
        let (next, _) = reg.create(ident(3), &[]).unwrap();
        assert_eq!(next, 8);
    }
}
