//! In-memory journal entry store.
//!
//! Owns the authoritative entry state behind a single `RwLock` and applies
//! every mutation as one atomic step: version check, lifecycle check,
//! validation, state change, and audit fact all happen inside the same
//! critical section. A failed operation leaves no partial state behind.
//!
//! Concurrency control is optimistic: every mutation carries the version the
//! caller last read, and a mismatch is rejected with
//! [`StateError::ConcurrentModification`] rather than silently overwriting.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use cuadre_core::chart::AccountDirectory;
use cuadre_core::journal::{
    self, validation, EntryStatus, JournalEntry, JournalEntryDraft, JournalLine, LedgerError,
    StateError, ValidatedEntry,
};
use cuadre_core::reports::{
    GeneralLedgerReport, LedgerFilter, LedgerProjector, TrialBalanceReport,
};
use cuadre_shared::types::{ActorId, JournalEntryId, JournalLineId};
use tracing::info;

use crate::audit::{AuditAction, AuditFact, AuditSink};

/// Mutable store state guarded by the lock.
#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<JournalEntryId, JournalEntry>,
    /// Monotonic tie-breaker for entries sharing a date.
    next_sequence: u64,
}

/// Journal entry repository with lifecycle enforcement and audit emission.
pub struct JournalStore {
    state: RwLock<StoreState>,
    chart: Arc<AccountDirectory>,
    audit: Arc<dyn AuditSink>,
}

impl JournalStore {
    /// Creates an empty store over the given chart of accounts.
    #[must_use]
    pub fn new(chart: Arc<AccountDirectory>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            chart,
            audit,
        }
    }

    /// Validates a draft and stores it as a new `Draft` entry at version 1.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] listing every violated rule.
    pub fn create(
        &self,
        draft: &JournalEntryDraft,
        actor: ActorId,
    ) -> Result<JournalEntry, LedgerError> {
        let validated = validation::validate(draft, |id| self.chart.info(id))?;

        let mut state = self.write_state()?;
        let sequence = state.next_sequence;
        state.next_sequence += 1;

        let entry = materialize(validated, sequence);
        state.entries.insert(entry.id, entry.clone());

        self.audit.record(AuditFact::now(
            entry.id,
            actor,
            AuditAction::Created,
            None,
            Some(EntryStatus::Draft),
        ));
        info!(entry_id = %entry.id, sequence, "created journal entry");
        Ok(entry)
    }

    /// Fetches an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotFound`] if no such entry exists.
    pub fn get(&self, id: JournalEntryId) -> Result<JournalEntry, LedgerError> {
        let state = self.read_state()?;
        state
            .entries
            .get(&id)
            .cloned()
            .ok_or_else(|| StateError::NotFound(id).into())
    }

    /// Lists entries passing the filter, in replay order (entry date, then
    /// sequence).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] if the store lock is poisoned.
    pub fn list(&self, filter: &LedgerFilter) -> Result<Vec<JournalEntry>, LedgerError> {
        let state = self.read_state()?;
        let mut entries: Vec<JournalEntry> = state
            .entries
            .values()
            .filter(|entry| filter.matches_entry(entry))
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.entry_date, entry.sequence));
        Ok(entries)
    }

    /// Replaces a draft entry's content after re-validation.
    ///
    /// The entry keeps its id, sequence, and creation time; lines are
    /// replaced wholesale and the version is bumped.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EntryLocked`] on a posted entry,
    /// [`StateError::ConcurrentModification`] on a version mismatch, or
    /// [`LedgerError::Validation`] if the new content is invalid.
    pub fn update(
        &self,
        id: JournalEntryId,
        expected_version: i64,
        draft: &JournalEntryDraft,
        actor: ActorId,
    ) -> Result<JournalEntry, LedgerError> {
        let validated = validation::validate(draft, |chart_id| self.chart.info(chart_id))?;

        let mut state = self.write_state()?;
        let entry = state
            .entries
            .get_mut(&id)
            .ok_or(StateError::NotFound(id))?;
        journal::ensure_version(entry, expected_version)?;
        journal::ensure_can_modify(entry)?;

        entry.entry_date = validated.entry_date;
        entry.description = validated.description.clone();
        entry.reference = validated.reference.clone();
        entry.lines = materialize_lines(validated);
        entry.version += 1;

        info!(entry_id = %id, version = entry.version, actor = %actor, "updated journal entry");
        Ok(entry.clone())
    }

    /// Deletes a draft entry.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EntryLocked`] on a posted entry; unpost first.
    pub fn delete(
        &self,
        id: JournalEntryId,
        expected_version: i64,
        actor: ActorId,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        let entry = state.entries.get(&id).ok_or(StateError::NotFound(id))?;
        journal::ensure_version(entry, expected_version)?;
        journal::ensure_can_delete(entry)?;

        let before = entry.status;
        state.entries.remove(&id);

        self.audit.record(AuditFact::now(
            id,
            actor,
            AuditAction::Deleted,
            Some(before),
            None,
        ));
        info!(entry_id = %id, "deleted journal entry");
        Ok(())
    }

    /// Posts a draft entry, making it immutable and ledger-visible.
    ///
    /// The entry is re-validated against the current chart first: accounts
    /// may have been deactivated or given children since the draft was
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EntryLocked`] if already posted,
    /// [`StateError::ConcurrentModification`] on a version mismatch, or
    /// [`LedgerError::Validation`] if the entry no longer validates.
    pub fn post(
        &self,
        id: JournalEntryId,
        expected_version: i64,
        actor: ActorId,
    ) -> Result<JournalEntry, LedgerError> {
        let mut state = self.write_state()?;
        let entry = state
            .entries
            .get_mut(&id)
            .ok_or(StateError::NotFound(id))?;
        journal::ensure_version(entry, expected_version)?;
        journal::ensure_can_post(entry)?;
        validation::revalidate(entry, |chart_id| self.chart.info(chart_id))?;

        entry.status = EntryStatus::Posted;
        entry.posted_at = Some(Utc::now());
        entry.version += 1;
        let snapshot = entry.clone();

        self.audit.record(AuditFact::now(
            id,
            actor,
            AuditAction::Posted,
            Some(EntryStatus::Draft),
            Some(EntryStatus::Posted),
        ));
        info!(entry_id = %id, version = snapshot.version, "posted journal entry");
        Ok(snapshot)
    }

    /// Reverts a posted entry to draft, restoring editability.
    ///
    /// All content fields keep their posted values; only the status,
    /// posted-at timestamp, and version change.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotPosted`] on a draft or
    /// [`StateError::ConcurrentModification`] on a version mismatch.
    pub fn unpost(
        &self,
        id: JournalEntryId,
        expected_version: i64,
        actor: ActorId,
    ) -> Result<JournalEntry, LedgerError> {
        let mut state = self.write_state()?;
        let entry = state
            .entries
            .get_mut(&id)
            .ok_or(StateError::NotFound(id))?;
        journal::ensure_version(entry, expected_version)?;
        journal::ensure_can_unpost(entry)?;

        entry.status = EntryStatus::Draft;
        entry.posted_at = None;
        entry.version += 1;
        let snapshot = entry.clone();

        self.audit.record(AuditFact::now(
            id,
            actor,
            AuditAction::Unposted,
            Some(EntryStatus::Posted),
            Some(EntryStatus::Draft),
        ));
        info!(entry_id = %id, version = snapshot.version, "unposted journal entry");
        Ok(snapshot)
    }

    /// Projects the general ledger over current committed state.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Report`] if the projection fails its
    /// consistency checks.
    pub fn general_ledger(&self, filter: &LedgerFilter) -> Result<GeneralLedgerReport, LedgerError> {
        let entries = self.snapshot()?;
        let report = LedgerProjector::general_ledger(&entries, &self.chart, filter)?;
        Ok(report)
    }

    /// Projects the trial balance over current committed state.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Report`] with an out-of-balance diagnosis if
    /// total debits and credits diverge.
    pub fn trial_balance(&self, filter: &LedgerFilter) -> Result<TrialBalanceReport, LedgerError> {
        let entries = self.snapshot()?;
        let report = LedgerProjector::trial_balance(&entries, &self.chart, filter)?;
        Ok(report)
    }

    fn snapshot(&self) -> Result<Vec<JournalEntry>, LedgerError> {
        let state = self.read_state()?;
        Ok(state.entries.values().cloned().collect())
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, StoreState>, LedgerError> {
        self.state
            .read()
            .map_err(|_| LedgerError::Storage("journal store lock poisoned".to_string()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, StoreState>, LedgerError> {
        self.state
            .write()
            .map_err(|_| LedgerError::Storage("journal store lock poisoned".to_string()))
    }
}

impl std::fmt::Debug for JournalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalStore")
            .field("accounts", &self.chart.len())
            .finish_non_exhaustive()
    }
}

/// Turns a validated entry into a stored draft at version 1.
fn materialize(validated: ValidatedEntry, sequence: u64) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::new(),
        entry_date: validated.entry_date,
        description: validated.description.clone(),
        reference: validated.reference.clone(),
        status: EntryStatus::Draft,
        sequence,
        version: 1,
        created_at: Utc::now(),
        posted_at: None,
        lines: materialize_lines(validated),
    }
}

fn materialize_lines(validated: ValidatedEntry) -> Vec<JournalLine> {
    validated
        .lines
        .into_iter()
        .map(|line| JournalLine {
            id: JournalLineId::new(),
            account_id: line.account_id,
            debit: line.debit,
            credit: line.credit,
            description: line.description,
        })
        .collect()
}
