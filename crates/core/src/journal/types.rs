//! Input and output types for entry validation.
//!
//! Drafts arrive from the presentation layer with raw user-entered strings;
//! the validator parses and coerces them into fixed-point amounts and
//! calendar dates, producing a [`ValidatedEntry`].

use chrono::NaiveDate;
use cuadre_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A candidate journal entry as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryDraft {
    /// Entry date as entered (expected `YYYY-MM-DD`).
    pub entry_date: String,
    /// Free-text description.
    pub description: String,
    /// Optional external reference number.
    pub reference: Option<String>,
    /// Candidate lines (minimum two).
    pub lines: Vec<JournalLineDraft>,
}

/// A candidate line with raw amount strings.
///
/// An empty string means the field was left untouched and parses as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLineDraft {
    /// The account to book against.
    pub account_id: AccountId,
    /// Debit amount as entered.
    pub debit: String,
    /// Credit amount as entered.
    pub credit: String,
    /// Optional per-line description.
    pub description: Option<String>,
}

/// A structurally valid entry with amounts coerced to cent precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedEntry {
    /// Parsed entry date.
    pub entry_date: NaiveDate,
    /// Trimmed description (non-empty).
    pub description: String,
    /// Optional external reference number.
    pub reference: Option<String>,
    /// Normalized lines.
    pub lines: Vec<ValidatedLine>,
    /// Debit/credit totals (balanced).
    pub totals: EntryTotals,
}

/// A normalized line: exactly one side strictly positive, both at cent
/// precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedLine {
    /// The account to book against.
    pub account_id: AccountId,
    /// Debit amount (zero for credit lines).
    pub debit: Decimal,
    /// Credit amount (zero for debit lines).
    pub credit: Decimal,
    /// Optional per-line description.
    pub description: Option<String>,
}

/// Entry totals for validation and display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Whether the entry is balanced (debits == credits).
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}
