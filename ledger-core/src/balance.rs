//! Ledger aggregation
//!
//! Derives per-member aggregates from an expense snapshot: totals paid and
//! net balances. Both are recomputed from scratch on demand; nothing here is
//! incremental or stateful.
//!
//! Unknown `paid_by` / split member ids are tolerated: they accumulate under
//! a zero-default entry instead of raising an error.

use crate::types::{Expense, Member, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn zeroed(members: &[Member]) -> BTreeMap<MemberId, Decimal> {
    members
        .iter()
        .map(|member| (member.id.clone(), Decimal::ZERO))
        .collect()
}

/// Total amount paid per member.
///
/// Every member appears in the result, zero included, even with no expenses.
pub fn totals_paid(expenses: &[Expense], members: &[Member]) -> BTreeMap<MemberId, Decimal> {
    let mut totals = zeroed(members);

    for expense in expenses {
        *totals
            .entry(expense.paid_by.clone())
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    totals
}

/// Net balance per member: positive means the member is owed money, negative
/// means the member owes.
///
/// The payer is credited the full expense amount; every split member is
/// debited its resolved share. A member who both pays and participates in
/// the split receives both effects. Whenever each expense's splits sum to
/// its amount, the balances sum to ~0.
pub fn net_balances(expenses: &[Expense], members: &[Member]) -> BTreeMap<MemberId, Decimal> {
    let mut balances = zeroed(members);

    for expense in expenses {
        *balances
            .entry(expense.paid_by.clone())
            .or_insert(Decimal::ZERO) += expense.amount;

        for split in &expense.splits {
            *balances
                .entry(split.member_id.clone())
                .or_insert(Decimal::ZERO) -= split.resolved_amount;
        }
    }

    tracing::debug!(
        "Computed net balances for {} members over {} expenses",
        balances.len(),
        expenses.len()
    );

    balances
}
