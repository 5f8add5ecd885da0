//! Indexed, read-only view over a set of account records.

use std::collections::{HashMap, HashSet};

use cuadre_shared::types::AccountId;

use super::account::{AccountRecord, AccountType};

/// Snapshot of the account facts the entry validator needs.
#[derive(Debug, Clone, Copy)]
pub struct AccountInfo {
    /// The account ID.
    pub id: AccountId,
    /// The account type.
    pub account_type: AccountType,
    /// Whether the account is active.
    pub is_active: bool,
    /// Whether the account is a leaf (has no children). Only leaf accounts
    /// may be booked against directly.
    pub is_leaf: bool,
}

/// Read-only lookup over the chart of accounts.
///
/// The parent-id set is precomputed at construction so leaf checks are O(1)
/// instead of scanning the full record set per validation.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: HashMap<AccountId, AccountRecord>,
    parent_ids: HashSet<AccountId>,
}

impl AccountDirectory {
    /// Builds a directory from a snapshot of account records.
    #[must_use]
    pub fn new(records: Vec<AccountRecord>) -> Self {
        let parent_ids = records.iter().filter_map(|r| r.parent_id).collect();
        let accounts = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            accounts,
            parent_ids,
        }
    }

    /// Looks up an account record by id.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&AccountRecord> {
        self.accounts.get(&id)
    }

    /// Returns true if the account exists and has no children.
    #[must_use]
    pub fn is_leaf(&self, id: AccountId) -> bool {
        self.accounts.contains_key(&id) && !self.parent_ids.contains(&id)
    }

    /// Returns the validator snapshot for an account, if it exists.
    #[must_use]
    pub fn info(&self, id: AccountId) -> Option<AccountInfo> {
        self.accounts.get(&id).map(|record| AccountInfo {
            id: record.id,
            account_type: record.account_type,
            is_active: record.is_active,
            is_leaf: !self.parent_ids.contains(&id),
        })
    }

    /// Number of accounts in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the directory holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
