//! Journal store for Cuadre.
//!
//! The shared store behind the ledger core: an in-memory journal repository
//! with per-entry optimistic versioning, draft/posted lifecycle enforcement,
//! and one audit fact per successful create/post/unpost/delete transition.
//!
//! All operations are synchronous request/response. The projector queries
//! always read current committed state, so posted/unposted visibility needs
//! no cache invalidation.

pub mod audit;
pub mod journal;

pub use audit::{AuditAction, AuditFact, AuditSink, MemoryAuditSink};
pub use journal::JournalStore;
