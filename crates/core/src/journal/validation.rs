//! Structural validation of candidate journal entries.
//!
//! The validator is a pure check: it parses raw user input, enforces the
//! double-entry invariants, and collects every violated rule so the caller
//! can surface all problems in one round trip. It never coerces an invalid
//! entry into a "best effort" balanced one.

use chrono::NaiveDate;
use cuadre_shared::types::amount::{parse_amount, CENT};
use cuadre_shared::types::AccountId;
use rust_decimal::Decimal;

use super::entry::{EntrySide, JournalEntry};
use super::error::{AccountIssue, ValidationError, Violations};
use super::types::{EntryTotals, JournalEntryDraft, ValidatedEntry, ValidatedLine};
use crate::chart::AccountInfo;

/// An entry is unbalanced when |debits - credits| reaches one cent.
pub const BALANCE_TOLERANCE: Decimal = CENT;

/// Format accepted for entry dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a candidate entry against the chart of accounts.
///
/// `account_info` resolves an account id to its validator snapshot; `None`
/// means the account does not exist.
///
/// # Errors
///
/// Returns [`Violations`] listing every violated rule, not just the first.
pub fn validate<F>(draft: &JournalEntryDraft, account_info: F) -> Result<ValidatedEntry, Violations>
where
    F: Fn(AccountId) -> Option<AccountInfo>,
{
    let mut violations = Vec::new();

    let entry_date = match NaiveDate::parse_from_str(draft.entry_date.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(ValidationError::MalformedDate {
                raw: draft.entry_date.clone(),
            });
            None
        }
    };

    let description = draft.description.trim();
    if description.is_empty() {
        violations.push(ValidationError::EmptyDescription);
    }

    if draft.lines.len() < 2 {
        violations.push(ValidationError::EmptyEntry {
            line_count: draft.lines.len(),
        });
    }

    let mut lines = Vec::with_capacity(draft.lines.len());
    let mut any_malformed = false;
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    for (index, line) in draft.lines.iter().enumerate() {
        let line_no = index + 1;

        let debit = match parse_amount(&line.debit) {
            Ok(amount) => Some(amount),
            Err(source) => {
                violations.push(ValidationError::MalformedAmount {
                    line: line_no,
                    side: EntrySide::Debit,
                    source,
                });
                any_malformed = true;
                None
            }
        };
        let credit = match parse_amount(&line.credit) {
            Ok(amount) => Some(amount),
            Err(source) => {
                violations.push(ValidationError::MalformedAmount {
                    line: line_no,
                    side: EntrySide::Credit,
                    source,
                });
                any_malformed = true;
                None
            }
        };

        let (Some(debit), Some(credit)) = (debit, credit) else {
            continue;
        };

        check_line(line_no, line.account_id, debit, credit, &account_info, &mut violations);

        total_debit += debit;
        total_credit += credit;
        lines.push(ValidatedLine {
            account_id: line.account_id,
            debit,
            credit,
            description: line.description.clone(),
        });
    }

    // With malformed amounts in the mix the totals are meaningless, so the
    // balance check would only produce a misleading second error.
    if !any_malformed && (total_debit - total_credit).abs() >= BALANCE_TOLERANCE {
        violations.push(ValidationError::Unbalanced {
            debits: total_debit,
            credits: total_credit,
        });
    }

    // A missing date always comes with a MalformedDate violation, so the
    // happy path below always has one.
    match entry_date {
        Some(entry_date) if violations.is_empty() => Ok(ValidatedEntry {
            entry_date,
            description: description.to_string(),
            reference: draft.reference.clone(),
            lines,
            totals: EntryTotals::new(total_debit, total_credit),
        }),
        _ => Err(Violations(violations)),
    }
}

/// Re-runs the structural checks against a stored entry.
///
/// Used on post to defend against stale data: an account may have been
/// deactivated, or gained children, since the draft was created.
///
/// # Errors
///
/// Returns [`Violations`] listing every violated rule.
pub fn revalidate<F>(entry: &JournalEntry, account_info: F) -> Result<(), Violations>
where
    F: Fn(AccountId) -> Option<AccountInfo>,
{
    let mut violations = Vec::new();

    if entry.description.trim().is_empty() {
        violations.push(ValidationError::EmptyDescription);
    }

    if entry.lines.len() < 2 {
        violations.push(ValidationError::EmptyEntry {
            line_count: entry.lines.len(),
        });
    }

    for (index, line) in entry.lines.iter().enumerate() {
        check_line(
            index + 1,
            line.account_id,
            line.debit,
            line.credit,
            &account_info,
            &mut violations,
        );
    }

    let total_debit = entry.total_debit();
    let total_credit = entry.total_credit();
    if (total_debit - total_credit).abs() >= BALANCE_TOLERANCE {
        violations.push(ValidationError::Unbalanced {
            debits: total_debit,
            credits: total_credit,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violations(violations))
    }
}

/// Shape and account checks for one parsed line.
fn check_line<F>(
    line_no: usize,
    account_id: AccountId,
    debit: Decimal,
    credit: Decimal,
    account_info: &F,
    violations: &mut Vec<ValidationError>,
) where
    F: Fn(AccountId) -> Option<AccountInfo>,
{
    if debit.is_zero() && credit.is_zero() {
        violations.push(ValidationError::ZeroLine { line: line_no });
    } else if !debit.is_zero() && !credit.is_zero() {
        violations.push(ValidationError::DoubleSidedLine { line: line_no });
    }

    let issue = match account_info(account_id) {
        None => Some(AccountIssue::NotFound),
        Some(info) if !info.is_active => Some(AccountIssue::Inactive),
        Some(info) if !info.is_leaf => Some(AccountIssue::NotLeaf),
        Some(_) => None,
    };
    if let Some(issue) = issue {
        violations.push(ValidationError::InvalidAccount {
            line: line_no,
            account_id,
            issue,
        });
    }
}
