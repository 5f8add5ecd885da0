//! Account domain types.

use cuadre_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// In double-entry bookkeeping:
/// - Asset/Expense accounts are debit-normal (debits increase the balance)
/// - Liability/Equity/Revenue accounts are credit-normal (credits increase it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (cash, receivables, equipment).
    Asset,
    /// Liability account (payables, loans).
    Liability,
    /// Equity account (capital, retained earnings).
    Equity,
    /// Revenue account (sales, service income).
    Revenue,
    /// Expense account (rent, salaries, supplies).
    Expense,
}

impl AccountType {
    /// Returns true for debit-normal accounts (Asset, Expense).
    #[must_use]
    pub fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Applies the account-type sign convention to a raw `debit - credit`
    /// balance. This is a presentation concern; the ledger accumulation
    /// itself always runs on `debit - credit`.
    #[must_use]
    pub fn natural_balance(self, debit_minus_credit: Decimal) -> Decimal {
        if self.is_debit_normal() {
            debit_minus_credit
        } else {
            -debit_minus_credit
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{name}")
    }
}

/// A node in the chart of accounts, as provided by the accounts module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Unique identifier.
    pub id: AccountId,
    /// Unique account code, sortable lexicographically (e.g. "1100").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Optional parent account; parents form a tree and are not bookable.
    pub parent_id: Option<AccountId>,
    /// Inactive accounts are soft-deactivated and reject new lines.
    pub is_active: bool,
}
