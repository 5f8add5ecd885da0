//! Ledger projection service.
//!
//! Derives the general ledger and trial balance by replaying journal entries
//! in `(entry_date, store sequence)` order. This ordering is load-bearing:
//! running balances are prefix sums over it, so it must be deterministic and
//! reproducible across queries.

use std::collections::HashMap;

use cuadre_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    AccountLedger, GeneralLedgerReport, LedgerFilter, LedgerLine, TrialBalanceReport,
    TrialBalanceRow, TrialBalanceTotals,
};
use crate::chart::AccountDirectory;
use crate::journal::JournalEntry;

/// Service deriving read-only ledger views. Never mutates source data.
pub struct LedgerProjector;

impl LedgerProjector {
    /// Derives the general ledger: per-account chronological lines with
    /// running balances and account totals.
    ///
    /// Within each account, lines are ordered by `(entry_date, sequence,
    /// line position)` and the running balance accumulates `debit - credit`
    /// from zero. Account-type sign conventions are left to presentation.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnknownAccount`] if a stored line references
    /// an account missing from the directory.
    pub fn general_ledger(
        entries: &[JournalEntry],
        chart: &AccountDirectory,
        filter: &LedgerFilter,
    ) -> Result<GeneralLedgerReport, ReportError> {
        let replay = Self::replay_order(entries, filter);

        let mut grouped: HashMap<AccountId, Vec<LedgerLine>> = HashMap::new();
        for entry in replay {
            for line in &entry.lines {
                if !filter.matches_account(line.account_id) {
                    continue;
                }
                if chart.get(line.account_id).is_none() {
                    return Err(ReportError::UnknownAccount(line.account_id));
                }
                grouped.entry(line.account_id).or_default().push(LedgerLine {
                    entry_id: entry.id,
                    line_id: line.id,
                    entry_date: entry.entry_date,
                    reference: entry.reference.clone(),
                    description: line
                        .description
                        .clone()
                        .unwrap_or_else(|| entry.description.clone()),
                    status: entry.status,
                    debit: line.debit,
                    credit: line.credit,
                    running_balance: Decimal::ZERO,
                });
            }
        }

        let mut accounts = Vec::with_capacity(grouped.len());
        for (account_id, mut lines) in grouped {
            let record = chart
                .get(account_id)
                .ok_or(ReportError::UnknownAccount(account_id))?;

            let mut running = Decimal::ZERO;
            let mut total_debit = Decimal::ZERO;
            let mut total_credit = Decimal::ZERO;
            for line in &mut lines {
                running += line.debit - line.credit;
                line.running_balance = running;
                total_debit += line.debit;
                total_credit += line.credit;
            }

            accounts.push(AccountLedger {
                account_id,
                code: record.code.clone(),
                name: record.name.clone(),
                account_type: record.account_type,
                lines,
                total_debit,
                total_credit,
                closing_balance: running,
            });
        }
        accounts.sort_by(|a, b| a.code.cmp(&b.code).then(a.account_id.cmp(&b.account_id)));

        Ok(GeneralLedgerReport {
            accounts,
            date_from: filter.date_from,
            date_to: filter.date_to,
            posted_only: filter.posted_only,
        })
    }

    /// Derives the trial balance: per-account debit and credit totals summed
    /// independently, with `balance = total_debit - total_credit`.
    ///
    /// The account filter is ignored here; a trial balance over a subset of
    /// accounts could never satisfy its own balancing invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::OutOfBalance`] when the report totals differ -
    /// the books are wrong and this must not be silently displayed - and
    /// [`ReportError::UnknownAccount`] for orphaned lines.
    pub fn trial_balance(
        entries: &[JournalEntry],
        chart: &AccountDirectory,
        filter: &LedgerFilter,
    ) -> Result<TrialBalanceReport, ReportError> {
        let mut sums: HashMap<AccountId, (Decimal, Decimal)> = HashMap::new();
        for entry in entries.iter().filter(|e| filter.matches_entry(e)) {
            for line in &entry.lines {
                if chart.get(line.account_id).is_none() {
                    return Err(ReportError::UnknownAccount(line.account_id));
                }
                let (debit, credit) = sums.entry(line.account_id).or_default();
                *debit += line.debit;
                *credit += line.credit;
            }
        }

        let mut rows = Vec::with_capacity(sums.len());
        for (account_id, (total_debit, total_credit)) in sums {
            let record = chart
                .get(account_id)
                .ok_or(ReportError::UnknownAccount(account_id))?;
            rows.push(TrialBalanceRow {
                account_id,
                code: record.code.clone(),
                name: record.name.clone(),
                account_type: record.account_type,
                total_debit,
                total_credit,
                balance: total_debit - total_credit,
            });
        }
        rows.sort_by(|a, b| a.code.cmp(&b.code).then(a.account_id.cmp(&b.account_id)));

        let total_debit: Decimal = rows.iter().map(|r| r.total_debit).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.total_credit).sum();
        if total_debit != total_credit {
            return Err(ReportError::OutOfBalance {
                total_debit,
                total_credit,
            });
        }

        Ok(TrialBalanceReport {
            rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: true,
            },
            date_from: filter.date_from,
            date_to: filter.date_to,
            posted_only: filter.posted_only,
        })
    }

    /// Selects entries passing the status/date filters, sorted into the
    /// deterministic replay order.
    fn replay_order<'a>(
        entries: &'a [JournalEntry],
        filter: &LedgerFilter,
    ) -> Vec<&'a JournalEntry> {
        let mut selected: Vec<&JournalEntry> = entries
            .iter()
            .filter(|entry| filter.matches_entry(entry))
            .collect();
        selected.sort_by_key(|entry| (entry.entry_date, entry.sequence));
        selected
    }
}
