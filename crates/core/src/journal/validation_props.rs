//! Property tests for entry validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{JournalEntryDraft, JournalLineDraft};
use super::validation::validate;
use crate::chart::{AccountInfo, AccountType};
use cuadre_shared::types::AccountId;

fn leaf_account(id: AccountId) -> Option<AccountInfo> {
    Some(AccountInfo {
        id,
        account_type: AccountType::Asset,
        is_active: true,
        is_leaf: true,
    })
}

/// Cent amounts between 0.01 and 10,000.00.
fn cents_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn draft_from_amounts(debits: &[Decimal], credits: &[Decimal]) -> JournalEntryDraft {
    let mut lines = Vec::with_capacity(debits.len() + credits.len());
    for amount in debits {
        lines.push(JournalLineDraft {
            account_id: AccountId::new(),
            debit: amount.to_string(),
            credit: String::new(),
            description: None,
        });
    }
    for amount in credits {
        lines.push(JournalLineDraft {
            account_id: AccountId::new(),
            debit: String::new(),
            credit: amount.to_string(),
            description: None,
        });
    }
    JournalEntryDraft {
        entry_date: "2025-06-30".to_string(),
        description: "Generated entry".to_string(),
        reference: None,
        lines,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any entry whose debit lines mirror its credit lines balances and is
    /// accepted, regardless of how many lines it has.
    #[test]
    fn prop_balanced_entries_accepted(amounts in prop::collection::vec(cents_strategy(), 1..8)) {
        let draft = draft_from_amounts(&amounts, &amounts);
        let validated = validate(&draft, leaf_account);
        prop_assert!(validated.is_ok());

        let validated = validated.unwrap();
        prop_assert!(validated.totals.is_balanced);
        prop_assert_eq!(validated.lines.len(), amounts.len() * 2);
    }

    /// Perturbing one credit by at least a cent always yields `Unbalanced`.
    #[test]
    fn prop_off_by_a_cent_rejected(
        amounts in prop::collection::vec(cents_strategy(), 1..8),
        drift_cents in 1i64..10_000i64,
        drift_up in any::<bool>(),
    ) {
        let mut credits = amounts.clone();
        let drift = Decimal::new(drift_cents, 2);
        credits[0] = if drift_up { credits[0] + drift } else {
            // Keep the credit positive so the only violation is the balance.
            (credits[0] - drift).max(Decimal::new(1, 2))
        };
        prop_assume!(credits[0] != amounts[0]);

        let draft = draft_from_amounts(&amounts, &credits);
        let violations = validate(&draft, leaf_account).unwrap_err();
        let has_unbalanced = violations.any(|v| matches!(v, ValidationError::Unbalanced { .. }));
        prop_assert!(has_unbalanced);
    }

    /// Validation is a pure check: validating the same draft twice yields
    /// identical normalized output.
    #[test]
    fn prop_validation_deterministic(amounts in prop::collection::vec(cents_strategy(), 1..6)) {
        let draft = draft_from_amounts(&amounts, &amounts);
        let first = validate(&draft, leaf_account).unwrap();
        let second = validate(&draft, leaf_account).unwrap();

        prop_assert_eq!(first.totals.total_debit, second.totals.total_debit);
        prop_assert_eq!(first.totals.total_credit, second.totals.total_credit);
        prop_assert_eq!(first.lines.len(), second.lines.len());
        for (a, b) in first.lines.iter().zip(second.lines.iter()) {
            prop_assert_eq!(a.debit, b.debit);
            prop_assert_eq!(a.credit, b.credit);
        }
    }

    /// Normalized amounts always carry cent precision.
    #[test]
    fn prop_amounts_normalized_to_cents(amounts in prop::collection::vec(cents_strategy(), 1..6)) {
        let draft = draft_from_amounts(&amounts, &amounts);
        let validated = validate(&draft, leaf_account).unwrap();
        for line in &validated.lines {
            prop_assert_eq!(line.debit.scale(), 2);
            prop_assert_eq!(line.credit.scale(), 2);
        }
    }
}
