//! Audit facts for journal lifecycle transitions.
//!
//! Every successful create, post, unpost, and delete emits exactly one fact
//! recording who did it, when, and the status transition. Facts are
//! append-only; nothing ever rewrites or removes them.

use std::fmt;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use cuadre_core::journal::EntryStatus;
use cuadre_shared::types::{ActorId, AuditFactId, JournalEntryId};
use serde::{Deserialize, Serialize};

/// The lifecycle transition an audit fact records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// A draft entry was created.
    Created,
    /// A draft was posted to the ledger.
    Posted,
    /// A posted entry was reverted to draft.
    Unposted,
    /// A draft entry was deleted.
    Deleted,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Posted => write!(f, "posted"),
            Self::Unposted => write!(f, "unposted"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// One immutable record of a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFact {
    /// Unique fact id.
    pub id: AuditFactId,
    /// The entry the transition applied to.
    pub entry_id: JournalEntryId,
    /// Who performed the transition.
    pub actor: ActorId,
    /// What happened.
    pub action: AuditAction,
    /// Status before the transition (`None` for create).
    pub before_status: Option<EntryStatus>,
    /// Status after the transition (`None` for delete).
    pub after_status: Option<EntryStatus>,
    /// When the transition was committed.
    pub occurred_at: DateTime<Utc>,
}

impl AuditFact {
    /// Builds a fact for a transition happening now.
    #[must_use]
    pub fn now(
        entry_id: JournalEntryId,
        actor: ActorId,
        action: AuditAction,
        before_status: Option<EntryStatus>,
        after_status: Option<EntryStatus>,
    ) -> Self {
        Self {
            id: AuditFactId::new(),
            entry_id,
            actor,
            action,
            before_status,
            after_status,
            occurred_at: Utc::now(),
        }
    }
}

/// Destination for audit facts.
///
/// The store records facts inside the same critical section as the state
/// change, so a sink observes them in commit order.
pub trait AuditSink: Send + Sync {
    /// Appends one fact.
    fn record(&self, fact: AuditFact);
}

/// In-memory append-only sink.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    facts: RwLock<Vec<AuditFact>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded facts in commit order.
    #[must_use]
    pub fn facts(&self) -> Vec<AuditFact> {
        match self.facts.read() {
            Ok(facts) => facts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// All facts recorded for one entry, in commit order.
    #[must_use]
    pub fn facts_for(&self, entry_id: JournalEntryId) -> Vec<AuditFact> {
        self.facts()
            .into_iter()
            .filter(|fact| fact.entry_id == entry_id)
            .collect()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, fact: AuditFact) {
        match self.facts.write() {
            Ok(mut facts) => facts.push(fact),
            Err(poisoned) => poisoned.into_inner().push(fact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_commit_order() {
        let sink = MemoryAuditSink::new();
        let entry_id = JournalEntryId::new();
        let actor = ActorId::new();

        sink.record(AuditFact::now(
            entry_id,
            actor,
            AuditAction::Created,
            None,
            Some(EntryStatus::Draft),
        ));
        sink.record(AuditFact::now(
            entry_id,
            actor,
            AuditAction::Posted,
            Some(EntryStatus::Draft),
            Some(EntryStatus::Posted),
        ));

        let facts = sink.facts_for(entry_id);
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].action, AuditAction::Created);
        assert_eq!(facts[1].action, AuditAction::Posted);
        assert_eq!(facts[1].before_status, Some(EntryStatus::Draft));
        assert_eq!(facts[1].after_status, Some(EntryStatus::Posted));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(AuditAction::Unposted.to_string(), "unposted");
        assert_eq!(AuditAction::Deleted.to_string(), "deleted");
    }
}
