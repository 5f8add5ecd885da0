//! Read-only chart of accounts lookup.
//!
//! The ledger core never creates or mutates accounts; it treats the chart of
//! accounts as an external collaborator and consumes a snapshot of its
//! records through [`AccountDirectory`].

pub mod account;
pub mod directory;

pub use account::{AccountRecord, AccountType};
pub use directory::{AccountDirectory, AccountInfo};
