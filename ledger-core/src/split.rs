//! Split resolution
//!
//! Turns a division strategy plus an expense amount into concrete per-member
//! shares. All resolvers are pure functions: they never fail on well-formed
//! input and allocate a fresh `Split` list per call.
//!
//! Amounts are rounded per member, half away from zero, after the
//! proportional computation (see [`crate::money::round_to_cents`]).

use crate::money;
use crate::types::{MemberId, Split, SplitType};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Divide `amount` equally among `member_ids`.
///
/// Each share is `round2(amount / n)`. The residual that per-share rounding
/// can leave (100 split 3 ways yields 33.33 × 3 = 99.99) is deliberately not
/// assigned to anyone; the settlement tolerance absorbs it downstream.
///
/// An empty id list yields an empty vector.
pub fn equal(amount: Decimal, member_ids: &[MemberId]) -> Vec<Split> {
    if member_ids.is_empty() {
        return Vec::new();
    }

    let per_person = amount / Decimal::from(member_ids.len());

    member_ids
        .iter()
        .map(|member_id| Split {
            member_id: member_id.clone(),
            split_type: SplitType::Equal,
            value: Decimal::ONE,
            resolved_amount: money::round_to_cents(per_person),
        })
        .collect()
}

/// Divide `amount` by percentage points per member.
///
/// Points that do not sum to exactly 100 are scaled by `100 / sum` first, so
/// the resolved amounts always account for the whole `amount` (up to cent
/// rounding). A zero sum degrades to all-zero shares instead of dividing by
/// zero. `value` records the normalized percentage.
pub fn percentage(amount: Decimal, percentages: &BTreeMap<MemberId, Decimal>) -> Vec<Split> {
    let total: Decimal = percentages.values().copied().sum();

    percentages
        .iter()
        .map(|(member_id, &points)| {
            if total.is_zero() {
                Split {
                    member_id: member_id.clone(),
                    split_type: SplitType::Percentage,
                    value: points,
                    resolved_amount: Decimal::ZERO,
                }
            } else {
                let normalized = points * Decimal::ONE_HUNDRED / total;
                Split {
                    member_id: member_id.clone(),
                    split_type: SplitType::Percentage,
                    value: normalized,
                    resolved_amount: money::round_to_cents(
                        amount * normalized / Decimal::ONE_HUNDRED,
                    ),
                }
            }
        })
        .collect()
}

/// Divide `amount` proportionally to share counts (2:1:1 → 50%, 25%, 25%).
///
/// A zero share total degrades to all-zero amounts.
pub fn shares(amount: Decimal, shares: &BTreeMap<MemberId, Decimal>) -> Vec<Split> {
    let total: Decimal = shares.values().copied().sum();

    shares
        .iter()
        .map(|(member_id, &share)| {
            let resolved_amount = if total.is_zero() {
                Decimal::ZERO
            } else {
                money::round_to_cents(amount * share / total)
            };
            Split {
                member_id: member_id.clone(),
                split_type: SplitType::Shares,
                value: share,
                resolved_amount,
            }
        })
        .collect()
}

/// Pass caller-specified exact amounts through unchanged.
///
/// No rounding, no validation: the caller is responsible for making the
/// amounts sum to the expense total (see [`crate::Expense::check_splits`]).
pub fn exact(exact_amounts: &BTreeMap<MemberId, Decimal>) -> Vec<Split> {
    exact_amounts
        .iter()
        .map(|(member_id, &amount)| Split {
            member_id: member_id.clone(),
            split_type: SplitType::Exact,
            value: amount,
            resolved_amount: amount,
        })
        .collect()
}
