//! Double-entry journal logic.
//!
//! This module implements the journal side of the ledger core:
//! - Journal entries and their debit/credit lines
//! - Structural validation of candidate entries
//! - The draft/posted lifecycle and its transition rules
//! - Error types for journal operations

pub mod entry;
pub mod error;
pub mod posting;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{EntrySide, EntryStatus, JournalEntry, JournalLine};
pub use error::{AccountIssue, LedgerError, StateError, ValidationError, Violations};
pub use posting::{
    ensure_can_delete, ensure_can_modify, ensure_can_post, ensure_can_unpost, ensure_version,
};
pub use types::{EntryTotals, JournalEntryDraft, JournalLineDraft, ValidatedEntry, ValidatedLine};
pub use validation::{revalidate, validate, BALANCE_TOLERANCE};
