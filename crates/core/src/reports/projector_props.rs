//! Property tests for ledger projections.

use chrono::{NaiveDate, Utc};
use cuadre_shared::types::{AccountId, JournalEntryId, JournalLineId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::projector::LedgerProjector;
use super::types::LedgerFilter;
use crate::chart::{AccountDirectory, AccountRecord, AccountType};
use crate::journal::{EntryStatus, JournalEntry, JournalLine};

/// A small fixed chart so generated entries overlap on accounts.
fn chart(accounts: &[AccountId]) -> AccountDirectory {
    let records = accounts
        .iter()
        .enumerate()
        .map(|(i, &id)| AccountRecord {
            id,
            code: format!("{:04}", 1000 + i),
            name: format!("Account {i}"),
            account_type: if i % 2 == 0 {
                AccountType::Asset
            } else {
                AccountType::Revenue
            },
            parent_id: None,
            is_active: true,
        })
        .collect();
    AccountDirectory::new(records)
}

/// Generates balanced posted entries over `accounts`: each entry debits one
/// account and credits another for the same amount.
fn balanced_entries(
    accounts: Vec<AccountId>,
) -> impl Strategy<Value = (Vec<AccountId>, Vec<JournalEntry>)> {
    let n = accounts.len();
    let accounts2 = accounts.clone();
    let entry_strategy = (0..n, 0..n, 1i64..100_000i64, 0u32..28u32).prop_map(
        move |(debit_idx, credit_idx, cents, day_offset)| {
            let amount = Decimal::new(cents, 2);
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
                + chrono::Days::new(u64::from(day_offset));
            (accounts[debit_idx], accounts[credit_idx], amount, date)
        },
    );

    prop::collection::vec(entry_strategy, 1..12).prop_map(move |seeds| {
        let entries = seeds
            .into_iter()
            .enumerate()
            .map(|(sequence, (debit_account, credit_account, amount, date))| JournalEntry {
                id: JournalEntryId::new(),
                entry_date: date,
                description: "Generated".to_string(),
                reference: None,
                status: EntryStatus::Posted,
                sequence: sequence as u64,
                version: 1,
                created_at: Utc::now(),
                posted_at: Some(Utc::now()),
                lines: vec![
                    JournalLine {
                        id: JournalLineId::new(),
                        account_id: debit_account,
                        debit: amount,
                        credit: Decimal::ZERO,
                        description: None,
                    },
                    JournalLine {
                        id: JournalLineId::new(),
                        account_id: credit_account,
                        debit: Decimal::ZERO,
                        credit: amount,
                        description: None,
                    },
                ],
            })
            .collect();
        (accounts2.clone(), entries)
    })
}

fn accounts_and_entries() -> impl Strategy<Value = (Vec<AccountId>, Vec<JournalEntry>)> {
    (2usize..6usize)
        .prop_map(|n| (0..n).map(|_| AccountId::new()).collect::<Vec<_>>())
        .prop_flat_map(balanced_entries)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Over any fully-posted balanced entry set, trial balance debits equal
    /// credits across all accounts.
    #[test]
    fn prop_trial_balance_always_balances((accounts, entries) in accounts_and_entries()) {
        let chart = chart(&accounts);
        let report =
            LedgerProjector::trial_balance(&entries, &chart, &LedgerFilter::default()).unwrap();
        prop_assert_eq!(report.totals.total_debit, report.totals.total_credit);
        prop_assert!(report.totals.is_balanced);
    }

    /// For every account, the running balance is the prefix sum of
    /// `debit - credit` and the closing balance matches the account totals.
    #[test]
    fn prop_running_balance_is_prefix_sum((accounts, entries) in accounts_and_entries()) {
        let chart = chart(&accounts);
        let report =
            LedgerProjector::general_ledger(&entries, &chart, &LedgerFilter::default()).unwrap();

        for account in &report.accounts {
            let mut running = Decimal::ZERO;
            for line in &account.lines {
                running += line.debit - line.credit;
                prop_assert_eq!(line.running_balance, running);
            }
            prop_assert_eq!(
                account.closing_balance,
                account.total_debit - account.total_credit
            );
        }
    }

    /// Re-running either query over unchanged data yields identical output.
    #[test]
    fn prop_projection_deterministic((accounts, entries) in accounts_and_entries()) {
        let chart = chart(&accounts);
        let filter = LedgerFilter::default();

        let gl1 = LedgerProjector::general_ledger(&entries, &chart, &filter).unwrap();
        let gl2 = LedgerProjector::general_ledger(&entries, &chart, &filter).unwrap();
        prop_assert_eq!(gl1, gl2);

        let tb1 = LedgerProjector::trial_balance(&entries, &chart, &filter).unwrap();
        let tb2 = LedgerProjector::trial_balance(&entries, &chart, &filter).unwrap();
        prop_assert_eq!(tb1, tb2);
    }

    /// The ledger and the trial balance agree on per-account totals.
    #[test]
    fn prop_ledger_and_trial_balance_agree((accounts, entries) in accounts_and_entries()) {
        let chart = chart(&accounts);
        let filter = LedgerFilter::default();

        let ledger = LedgerProjector::general_ledger(&entries, &chart, &filter).unwrap();
        let tb = LedgerProjector::trial_balance(&entries, &chart, &filter).unwrap();

        prop_assert_eq!(ledger.accounts.len(), tb.rows.len());
        for (account, row) in ledger.accounts.iter().zip(tb.rows.iter()) {
            prop_assert_eq!(account.account_id, row.account_id);
            prop_assert_eq!(account.total_debit, row.total_debit);
            prop_assert_eq!(account.total_credit, row.total_credit);
            prop_assert_eq!(account.closing_balance, row.balance);
        }
    }
}
