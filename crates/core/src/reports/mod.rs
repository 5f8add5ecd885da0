//! Derived ledger views.
//!
//! The projector replays stored journal entries into the General Ledger and
//! Trial Balance. It never mutates source data, and re-running a query with
//! identical filters over identical data yields identical results.

pub mod error;
pub mod projector;
pub mod types;

#[cfg(test)]
mod projector_props;

pub use error::ReportError;
pub use projector::LedgerProjector;
pub use types::{
    AccountLedger, GeneralLedgerReport, LedgerFilter, LedgerLine, TrialBalanceReport,
    TrialBalanceRow, TrialBalanceTotals,
};
