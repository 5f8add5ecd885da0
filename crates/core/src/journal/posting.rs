//! Posting lifecycle transition rules.
//!
//! The authoritative state lives in the store; these checks are the pure
//! rules every transition must pass. All illegal transitions are rejected
//! synchronously with a typed [`StateError`] and no partial state change.

use super::entry::{EntryStatus, JournalEntry};
use super::error::StateError;

/// Optimistic-concurrency guard: the caller's expected version must match
/// the stored one.
///
/// # Errors
///
/// Returns [`StateError::ConcurrentModification`] on mismatch.
pub fn ensure_version(entry: &JournalEntry, expected: i64) -> Result<(), StateError> {
    if entry.version != expected {
        return Err(StateError::ConcurrentModification {
            entry_id: entry.id,
            expected,
            actual: entry.version,
        });
    }
    Ok(())
}

/// Post is only legal from `Draft`.
///
/// # Errors
///
/// Returns [`StateError::EntryLocked`] if the entry is already posted.
pub fn ensure_can_post(entry: &JournalEntry) -> Result<(), StateError> {
    match entry.status {
        EntryStatus::Draft => Ok(()),
        EntryStatus::Posted => Err(StateError::EntryLocked(entry.id)),
    }
}

/// Unpost is only legal from `Posted`.
///
/// # Errors
///
/// Returns [`StateError::NotPosted`] if the entry is still a draft.
pub fn ensure_can_unpost(entry: &JournalEntry) -> Result<(), StateError> {
    match entry.status {
        EntryStatus::Posted => Ok(()),
        EntryStatus::Draft => Err(StateError::NotPosted(entry.id)),
    }
}

/// Edits are only legal while the entry is a draft.
///
/// # Errors
///
/// Returns [`StateError::EntryLocked`] on a posted entry.
pub fn ensure_can_modify(entry: &JournalEntry) -> Result<(), StateError> {
    if entry.status.is_immutable() {
        return Err(StateError::EntryLocked(entry.id));
    }
    Ok(())
}

/// Deletes are only legal while the entry is a draft; unpost first.
///
/// # Errors
///
/// Returns [`StateError::EntryLocked`] on a posted entry.
pub fn ensure_can_delete(entry: &JournalEntry) -> Result<(), StateError> {
    ensure_can_modify(entry)
}
