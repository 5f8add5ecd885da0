//! Report data types.
//!
//! All of these are derived views: recomputed on every query, never
//! persisted.

use chrono::NaiveDate;
use cuadre_shared::types::{AccountId, JournalEntryId, JournalLineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::AccountType;
use crate::journal::{EntryStatus, JournalEntry};

/// Filter for ledger and trial-balance queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerFilter {
    /// Restrict to these accounts (general ledger only).
    pub account_ids: Option<Vec<AccountId>>,
    /// Inclusive start of the entry-date range.
    pub date_from: Option<NaiveDate>,
    /// Inclusive end of the entry-date range.
    pub date_to: Option<NaiveDate>,
    /// Include only posted entries.
    pub posted_only: bool,
}

impl Default for LedgerFilter {
    fn default() -> Self {
        Self {
            account_ids: None,
            date_from: None,
            date_to: None,
            posted_only: true,
        }
    }
}

impl LedgerFilter {
    /// Returns true if the entry passes the status and date-range filters.
    #[must_use]
    pub fn matches_entry(&self, entry: &JournalEntry) -> bool {
        if self.posted_only && entry.status != EntryStatus::Posted {
            return false;
        }
        if let Some(from) = self.date_from {
            if entry.entry_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.entry_date > to {
                return false;
            }
        }
        true
    }

    /// Returns true if the account passes the account filter.
    #[must_use]
    pub fn matches_account(&self, account_id: AccountId) -> bool {
        match &self.account_ids {
            Some(ids) => ids.contains(&account_id),
            None => true,
        }
    }
}

/// One journal line joined to its parent entry's context, annotated with the
/// running balance at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// The parent entry.
    pub entry_id: JournalEntryId,
    /// The underlying journal line.
    pub line_id: JournalLineId,
    /// Parent entry date.
    pub entry_date: NaiveDate,
    /// Parent entry reference number, if any.
    pub reference: Option<String>,
    /// Line description, falling back to the entry description.
    pub description: String,
    /// Parent entry status.
    pub status: EntryStatus,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Prefix sum of `debit - credit` over this account's lines in replay
    /// order, starting from zero.
    pub running_balance: Decimal,
}

/// Per-account section of the general ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLedger {
    /// The account.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Lines in replay order with running balances.
    pub lines: Vec<LedgerLine>,
    /// Sum of debit amounts.
    pub total_debit: Decimal,
    /// Sum of credit amounts.
    pub total_credit: Decimal,
    /// Final running balance (`total_debit - total_credit`).
    pub closing_balance: Decimal,
}

/// General ledger report: per-account chronological lines with running
/// balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralLedgerReport {
    /// Accounts with activity, ordered by account code.
    pub accounts: Vec<AccountLedger>,
    /// Echo of the date-range filter.
    pub date_from: Option<NaiveDate>,
    /// Echo of the date-range filter.
    pub date_to: Option<NaiveDate>,
    /// Whether only posted entries were included.
    pub posted_only: bool,
}

/// Per-account aggregate row of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// The account.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Total debits (summed independently, not netted).
    pub total_debit: Decimal,
    /// Total credits (summed independently, not netted).
    pub total_credit: Decimal,
    /// `total_debit - total_credit`.
    pub balance: Decimal,
}

impl TrialBalanceRow {
    /// The balance signed by the account-type convention, so credit-normal
    /// accounts with credit activity show positive.
    #[must_use]
    pub fn natural_balance(&self) -> Decimal {
        self.account_type.natural_balance(self.balance)
    }
}

/// Trial balance totals across all accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Rows ordered by account code.
    pub rows: Vec<TrialBalanceRow>,
    /// Report totals (balanced, or the query fails).
    pub totals: TrialBalanceTotals,
    /// Echo of the date-range filter.
    pub date_from: Option<NaiveDate>,
    /// Echo of the date-range filter.
    pub date_to: Option<NaiveDate>,
    /// Whether only posted entries were included.
    pub posted_only: bool,
}
