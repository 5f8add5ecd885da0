//! Journal entry domain types.

use chrono::{DateTime, NaiveDate, Utc};
use cuadre_shared::types::{AccountId, JournalEntryId, JournalLineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of a journal line an amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit side.
    Debit,
    /// Credit side.
    Credit,
}

impl std::fmt::Display for EntrySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// Journal entry lifecycle state.
///
/// Entries start as drafts and become immutable once posted. An explicit
/// unpost transition returns a posted entry to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is being drafted and can be modified or deleted.
    Draft,
    /// Entry has been posted to the ledger (immutable).
    Posted,
}

impl EntryStatus {
    /// Returns true if the entry can be modified or deleted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the entry is locked against mutation.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Posted)
    }
}

/// One debit-or-credit movement within a journal entry.
///
/// Exactly one of `debit`/`credit` is strictly positive; the other is zero.
/// Lines are exclusively owned by their parent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier for this line.
    pub id: JournalLineId,
    /// The account this line books against.
    pub account_id: AccountId,
    /// Debit amount (zero if this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit: Decimal,
    /// Optional per-line description.
    pub description: Option<String>,
}

impl JournalLine {
    /// Returns `debit - credit`: positive for debit lines, negative for
    /// credit lines. Running balances are prefix sums of this value.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Returns which side of the entry this line sits on.
    #[must_use]
    pub fn side(&self) -> EntrySide {
        if self.credit > Decimal::ZERO {
            EntrySide::Credit
        } else {
            EntrySide::Debit
        }
    }
}

/// A single accounting transaction: an ordered, balanced set of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Date the transaction occurred.
    pub entry_date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Optional external reference number (e.g. invoice number).
    pub reference: Option<String>,
    /// Current lifecycle state.
    pub status: EntryStatus,
    /// Store-assigned creation order. Ties on `entry_date` are broken by
    /// this sequence so ledger replay is deterministic.
    pub sequence: u64,
    /// Optimistic lock version, bumped on every successful mutation.
    pub version: i64,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last posted, if it is posted.
    pub posted_at: Option<DateTime<Utc>>,
    /// Ordered lines (minimum two).
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Returns true if the entry can currently be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    /// Sum of all debit amounts.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of all credit amounts.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }
}
