//! Property-based tests for settlement invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Replay correctness: applying the transfers settles every balance
//! - Heuristic minimality: at most N − 1 transfers for N unsettled balances
//! - Graceful degradation: inconsistent snapshots never panic

use ledger_core::{money, MemberId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use settlement::{Debt, DebtSimplifier};
use std::collections::BTreeMap;

/// Strategy for snapshots that conserve money (balances sum to exactly 0)
fn balanced_snapshot_strategy() -> impl Strategy<Value = BTreeMap<MemberId, Decimal>> {
    prop::collection::btree_map("[a-z]{4,8}", -1_000_000i64..1_000_000i64, 2..10).prop_map(|raw| {
        let mut balances: BTreeMap<MemberId, Decimal> = raw
            .into_iter()
            .map(|(name, cents)| (MemberId::new(name), Decimal::new(cents, 2)))
            .collect();

        // Force conservation by folding the imbalance into one member
        let sum: Decimal = balances.values().copied().sum();
        if let Some(first) = balances.values_mut().next() {
            *first -= sum;
        }
        balances
    })
}

/// Strategy for arbitrary (possibly inconsistent) snapshots
fn arbitrary_snapshot_strategy() -> impl Strategy<Value = BTreeMap<MemberId, Decimal>> {
    prop::collection::btree_map("[a-z]{4,8}", -1_000_000i64..1_000_000i64, 0..10).prop_map(|raw| {
        raw.into_iter()
            .map(|(name, cents)| (MemberId::new(name), Decimal::new(cents, 2)))
            .collect()
    })
}

/// Apply transfers back onto the snapshot they were computed from
fn replay(balances: &BTreeMap<MemberId, Decimal>, transfers: &[Debt]) -> BTreeMap<MemberId, Decimal> {
    let mut after = balances.clone();
    for debt in transfers {
        *after.entry(debt.from.clone()).or_insert(Decimal::ZERO) += debt.amount;
        *after.entry(debt.to.clone()).or_insert(Decimal::ZERO) -= debt.amount;
    }
    after
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: replaying the transfers brings every balance to ~0
    #[test]
    fn prop_settlement_replay_settles(balances in balanced_snapshot_strategy()) {
        let transfers = DebtSimplifier::default().simplify(&balances);
        let after = replay(&balances, &transfers);

        // Suppressed sub-cent transfers bound the residual per member
        let slack = Decimal::new(balances.len() as i64, 2);
        for remaining in after.values() {
            prop_assert!(remaining.abs() <= slack);
        }
    }

    /// Property: at most N − 1 transfers for N unsettled balances
    #[test]
    fn prop_settlement_minimality(balances in balanced_snapshot_strategy()) {
        let transfers = DebtSimplifier::default().simplify(&balances);

        let unsettled = balances
            .values()
            .filter(|b| b.abs() > money::cent())
            .count();

        prop_assert!(transfers.len() <= unsettled.saturating_sub(1));
    }

    /// Property: every transfer is positive, above the noise floor, and runs
    /// from a debtor to a creditor
    #[test]
    fn prop_transfers_well_formed(balances in arbitrary_snapshot_strategy()) {
        let transfers = DebtSimplifier::default().simplify(&balances);

        for debt in &transfers {
            prop_assert!(debt.amount > money::cent());
            prop_assert!(balances[&debt.from] < Decimal::ZERO);
            prop_assert!(balances[&debt.to] > Decimal::ZERO);
        }
    }

    /// Property: an inconsistent snapshot never errors or panics, and the
    /// recorded transfers never exceed the smaller side of the imbalance
    #[test]
    fn prop_imbalance_degrades_gracefully(balances in arbitrary_snapshot_strategy()) {
        let plan = DebtSimplifier::default().plan(&balances);

        let matchable = plan.total_credit.min(plan.total_debit);
        prop_assert!(plan.total_transferred <= matchable);
        prop_assert_eq!(plan.residual, plan.total_credit - plan.total_debit);
    }

    /// Property: simplification is pure: same snapshot, same plan
    #[test]
    fn prop_simplify_idempotent(balances in arbitrary_snapshot_strategy()) {
        let simplifier = DebtSimplifier::default();
        prop_assert_eq!(simplifier.simplify(&balances), simplifier.simplify(&balances));
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use chrono::Utc;
    use ledger_core::{split, CurrencyCode, Expense, Member};
    use settlement::SettlementEngine;
    use uuid::Uuid;

    fn member(id: &str, group_id: Uuid) -> Member {
        Member {
            id: MemberId::new(id),
            group_id,
            name: id.to_string(),
            home_currency: CurrencyCode::new("USD"),
            created_at: Utc::now(),
        }
    }

    fn equal_expense(paid_by: &str, cents: i64, among: &[&str], group_id: Uuid) -> Expense {
        let amount = Decimal::new(cents, 2);
        let ids: Vec<MemberId> = among.iter().map(|m| MemberId::new(*m)).collect();
        Expense {
            expense_id: Uuid::new_v4(),
            group_id,
            paid_by: MemberId::new(paid_by),
            amount,
            currency: CurrencyCode::new("USD"),
            exchange_rate: Decimal::ONE,
            description: "test".to_string(),
            category: None,
            date: Utc::now(),
            splits: split::equal(amount, &ids),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_dinner_and_coffee_settle_to_two_transfers() {
        // Alice pays 90 split 3 ways, Bob pays 30 split 3 ways.
        // Balances: Alice +50, Bob -10, Carol -40.
        let group_id = Uuid::new_v4();
        let members = vec![
            member("alice", group_id),
            member("bob", group_id),
            member("carol", group_id),
        ];
        let expenses = vec![
            equal_expense("alice", 9000, &["alice", "bob", "carol"], group_id),
            equal_expense("bob", 3000, &["alice", "bob", "carol"], group_id),
        ];

        let plan = SettlementEngine::default()
            .settle_checked(&expenses, &members)
            .unwrap();

        assert_eq!(
            plan.transfers,
            vec![
                Debt {
                    from: MemberId::new("carol"),
                    to: MemberId::new("alice"),
                    amount: Decimal::new(4000, 2),
                },
                Debt {
                    from: MemberId::new("bob"),
                    to: MemberId::new("alice"),
                    amount: Decimal::new(1000, 2),
                },
            ]
        );
        assert!(plan.is_fully_settled(money::cent()));
    }

    #[test]
    fn test_settled_group_needs_no_transfers() {
        let group_id = Uuid::new_v4();
        let members = vec![
            member("alice", group_id),
            member("bob", group_id),
            member("carol", group_id),
        ];

        let plan = SettlementEngine::default().settle(&[], &members);

        assert!(plan.transfers.is_empty());
        assert_eq!(plan.member_count, 3);
        assert_eq!(plan.creditor_count, 0);
        assert_eq!(plan.debtor_count, 0);
    }

    #[test]
    fn test_plan_serializes_for_the_app_layer() {
        let mut balances = BTreeMap::new();
        balances.insert(MemberId::new("alice"), Decimal::new(5000, 2));
        balances.insert(MemberId::new("bob"), Decimal::new(-5000, 2));

        let plan = DebtSimplifier::default().plan(&balances);
        let json = serde_json::to_string(&plan).unwrap();
        let back: settlement::SettlementPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back.transfers, plan.transfers);
        assert_eq!(back.plan_id, plan.plan_id);
        assert_eq!(back.total_transferred, Decimal::new(5000, 2));
    }
}
