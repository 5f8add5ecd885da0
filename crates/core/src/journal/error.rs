//! Error types for journal operations.
//!
//! Three caller-facing categories with distinct handling:
//! - [`ValidationError`] - caller-fixable input problems, surfaced together
//! - [`StateError`] - a transition conflicts with current persisted state
//! - `ReportError` (in `reports`) - data-integrity problems in posted data
//!
//! Transient storage failures are a fourth, retryable category carried by
//! [`LedgerError::Storage`].

use cuadre_shared::types::{AccountId, JournalEntryId};
use cuadre_shared::types::amount::AmountParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::EntrySide;
use crate::reports::error::ReportError;

/// Why a referenced account cannot be booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountIssue {
    /// No account with this id exists.
    NotFound,
    /// The account is soft-deactivated.
    Inactive,
    /// The account has child accounts; only leaves are bookable.
    NotLeaf,
}

impl std::fmt::Display for AccountIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Inactive => write!(f, "inactive"),
            Self::NotLeaf => write!(f, "not a leaf account"),
        }
    }
}

/// A single violated validation rule. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Debits and credits differ by at least one cent.
    #[error("entry is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Fewer than two lines. The raw line count is what is checked: lines
    /// violating other rules still count toward the minimum and report their
    /// own, more specific violations instead.
    #[error("entry must have at least 2 lines, got {line_count}")]
    EmptyEntry {
        /// Number of lines supplied.
        line_count: usize,
    },

    /// A line references an account that cannot be booked against.
    #[error("line {line}: account {account_id} is {issue}")]
    InvalidAccount {
        /// 1-based line number.
        line: usize,
        /// The offending account reference.
        account_id: AccountId,
        /// Why the account is rejected.
        issue: AccountIssue,
    },

    /// A raw amount string could not be coerced to cents.
    #[error("line {line}: {side} amount is malformed: {source}")]
    MalformedAmount {
        /// 1-based line number.
        line: usize,
        /// Which side the malformed amount was on.
        side: EntrySide,
        /// The underlying parse failure.
        source: AmountParseError,
    },

    /// The entry date does not parse as a calendar date.
    #[error("entry date is malformed: {raw:?} (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The raw date string as entered.
        raw: String,
    },

    /// The description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Both debit and credit are zero on a line.
    #[error("line {line}: either debit or credit must be positive")]
    ZeroLine {
        /// 1-based line number.
        line: usize,
    },

    /// Both debit and credit are positive on a line.
    #[error("line {line}: debit and credit are mutually exclusive")]
    DoubleSidedLine {
        /// 1-based line number.
        line: usize,
    },
}

/// Every rule an entry violated, collected so a single round trip can report
/// all problems at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry failed validation with {} violation(s)", .0.len())]
pub struct Violations(pub Vec<ValidationError>);

impl Violations {
    /// The individual violations, in detection order.
    #[must_use]
    pub fn all(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns true if any violation matches the predicate.
    pub fn any(&self, predicate: impl Fn(&ValidationError) -> bool) -> bool {
        self.0.iter().any(predicate)
    }
}

/// A transition conflicts with the entry's current persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// No entry with this id exists.
    #[error("journal entry not found: {0}")]
    NotFound(JournalEntryId),

    /// The entry is posted and locked against mutation; unpost first.
    #[error("journal entry {0} is posted and locked")]
    EntryLocked(JournalEntryId),

    /// The entry is not posted, so it cannot be unposted.
    #[error("journal entry {0} is not posted")]
    NotPosted(JournalEntryId),

    /// Another caller changed the entry between read and write.
    #[error(
        "journal entry {entry_id} was modified concurrently: expected version {expected}, found {actual}"
    )]
    ConcurrentModification {
        /// The entry in question.
        entry_id: JournalEntryId,
        /// The version the caller based its request on.
        expected: i64,
        /// The version actually stored.
        actual: i64,
    },
}

/// Top-level error for ledger operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The entry violated one or more validation rules.
    #[error(transparent)]
    Validation(#[from] Violations),

    /// The requested transition conflicts with current state.
    #[error(transparent)]
    State(#[from] StateError),

    /// A derived report detected a data-integrity problem.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The underlying store failed transiently; safe to retry with backoff.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::State(state) => match state {
                StateError::NotFound(_) => "ENTRY_NOT_FOUND",
                StateError::EntryLocked(_) => "ENTRY_LOCKED",
                StateError::NotPosted(_) => "ENTRY_NOT_POSTED",
                StateError::ConcurrentModification { .. } => "CONCURRENT_MODIFICATION",
            },
            Self::Report(report) => match report {
                ReportError::OutOfBalance { .. } => "OUT_OF_BALANCE",
                ReportError::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            },
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns true if this error is safe to retry automatically.
    ///
    /// Validation and state errors are not: the caller must fix its input or
    /// reload entry state and let the user retry explicitly.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
