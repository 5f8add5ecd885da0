//! Report error types.

use cuadre_shared::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Data-integrity problems detected while deriving a report.
///
/// These indicate the books are wrong and must be surfaced prominently,
/// never silently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The filtered entry set does not balance. Either unposted entries
    /// leaked into a posted-only view or a validator escape corrupted the
    /// stored data.
    #[error("trial balance out of balance: debits ({total_debit}) != credits ({total_credit})")]
    OutOfBalance {
        /// Sum of debit totals across all accounts.
        total_debit: Decimal,
        /// Sum of credit totals across all accounts.
        total_credit: Decimal,
    },

    /// A stored line references an account missing from the directory.
    #[error("ledger line references unknown account {0}")]
    UnknownAccount(AccountId),
}
