//! Shared fixtures for store integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use cuadre_core::chart::{AccountDirectory, AccountRecord, AccountType};
use cuadre_core::journal::{JournalEntryDraft, JournalLineDraft};
use cuadre_shared::types::AccountId;
use cuadre_store::{JournalStore, MemoryAuditSink};

/// A small working chart: leaf accounts for booking plus a parent and an
/// inactive account for negative cases.
pub struct TestChart {
    pub cash: AccountId,
    pub receivable: AccountId,
    pub revenue: AccountId,
    pub rent_expense: AccountId,
    pub assets_parent: AccountId,
    pub dormant: AccountId,
}

impl TestChart {
    pub fn records(&self) -> Vec<AccountRecord> {
        vec![
            record(self.assets_parent, "1000", "Assets", AccountType::Asset, None, true),
            record(
                self.cash,
                "1010",
                "Cash",
                AccountType::Asset,
                Some(self.assets_parent),
                true,
            ),
            record(
                self.receivable,
                "1020",
                "Accounts Receivable",
                AccountType::Asset,
                Some(self.assets_parent),
                true,
            ),
            record(self.revenue, "4000", "Sales Revenue", AccountType::Revenue, None, true),
            record(self.rent_expense, "5000", "Rent Expense", AccountType::Expense, None, true),
            record(self.dormant, "5900", "Dormant", AccountType::Expense, None, false),
        ]
    }
}

fn record(
    id: AccountId,
    code: &str,
    name: &str,
    account_type: AccountType,
    parent_id: Option<AccountId>,
    is_active: bool,
) -> AccountRecord {
    AccountRecord {
        id,
        code: code.to_string(),
        name: name.to_string(),
        account_type,
        parent_id,
        is_active,
    }
}

pub fn test_chart() -> TestChart {
    TestChart {
        cash: AccountId::new(),
        receivable: AccountId::new(),
        revenue: AccountId::new(),
        rent_expense: AccountId::new(),
        assets_parent: AccountId::new(),
        dormant: AccountId::new(),
    }
}

/// Builds a store over the test chart with an in-memory audit sink.
pub fn test_store() -> (TestChart, Arc<MemoryAuditSink>, JournalStore) {
    let chart = test_chart();
    let directory = Arc::new(AccountDirectory::new(chart.records()));
    let audit = Arc::new(MemoryAuditSink::new());
    let sink: Arc<MemoryAuditSink> = Arc::clone(&audit);
    let store = JournalStore::new(directory, sink);
    (chart, audit, store)
}

/// A balanced two-line draft: debit one account, credit another.
pub fn balanced_draft(
    date: &str,
    description: &str,
    debit_account: AccountId,
    credit_account: AccountId,
    amount: &str,
) -> JournalEntryDraft {
    JournalEntryDraft {
        entry_date: date.to_string(),
        description: description.to_string(),
        reference: None,
        lines: vec![
            line(debit_account, amount, ""),
            line(credit_account, "", amount),
        ],
    }
}

pub fn line(account_id: AccountId, debit: &str, credit: &str) -> JournalLineDraft {
    JournalLineDraft {
        account_id,
        debit: debit.to_string(),
        credit: credit.to_string(),
        description: None,
    }
}
