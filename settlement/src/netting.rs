//! Greedy debt netting
//!
//! Reduces a balance snapshot to a small set of point-to-point transfers
//! that zero out every balance.
//!
//! # Algorithm
//!
//! 1. Partition members into creditors (balance > tolerance) and debtors
//!    (balance < −tolerance); anything within ±tolerance is already settled
//! 2. Sort both sides by amount, descending (stable, so ties keep the
//!    snapshot's key order)
//! 3. Repeatedly match the current largest creditor with the current largest
//!    debtor, transferring `min(remaining, remaining)`
//! 4. Stop when either side is exhausted
//!
//! The match is the standard largest-creditor/largest-debtor heuristic: for
//! N unsettled balances it records at most N − 1 transfers, not a proven
//! global optimum.
//!
//! # Example
//!
//! ```text
//! Balances:
//!   alice: +50.00
//!   bob:   -10.00
//!   carol: -40.00
//!
//! Transfers:
//!   carol pays alice 40.00
//!   bob   pays alice 10.00
//! ```

use crate::config::Config;
use crate::types::{Debt, MemberPosition, SettlementPlan};
use chrono::Utc;
use ledger_core::{money, MemberId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Debt simplifier
#[derive(Debug, Clone)]
pub struct DebtSimplifier {
    /// Balances within this of zero are treated as settled
    tolerance: Decimal,

    /// Transfers at or below this amount are suppressed as noise
    min_transfer: Decimal,
}

impl DebtSimplifier {
    /// Create new simplifier
    pub fn new(tolerance: Decimal, min_transfer: Decimal) -> Self {
        Self {
            tolerance,
            min_transfer,
        }
    }

    /// Create from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tolerance, config.min_transfer)
    }

    /// Compute the transfers that settle `balances`.
    ///
    /// Never fails: a snapshot that does not sum to ~0 produces whatever
    /// matches exist and leaves the remainder unassigned.
    pub fn simplify(&self, balances: &BTreeMap<MemberId, Decimal>) -> Vec<Debt> {
        let (creditors, debtors) = self.partition(balances);
        self.match_transfers(&creditors, &debtors)
    }

    /// Compute a full settlement plan: the transfers of [`simplify`] plus
    /// partition counts, gross totals, and the residual imbalance.
    ///
    /// [`simplify`]: DebtSimplifier::simplify
    pub fn plan(&self, balances: &BTreeMap<MemberId, Decimal>) -> SettlementPlan {
        let (creditors, debtors) = self.partition(balances);

        let total_credit: Decimal = creditors.iter().map(MemberPosition::abs_net).sum();
        let total_debit: Decimal = debtors.iter().map(MemberPosition::abs_net).sum();

        let transfers = self.match_transfers(&creditors, &debtors);
        let total_transferred: Decimal = transfers.iter().map(|t| t.amount).sum();

        let plan = SettlementPlan {
            plan_id: Uuid::new_v4(),
            member_count: balances.len(),
            creditor_count: creditors.len(),
            debtor_count: debtors.len(),
            transfers,
            total_credit,
            total_debit,
            total_transferred,
            residual: total_credit - total_debit,
            created_at: Utc::now(),
        };

        tracing::debug!(
            "Settlement plan {}: {} transfers for {} creditors / {} debtors, residual {}",
            plan.plan_id,
            plan.transfer_count(),
            plan.creditor_count,
            plan.debtor_count,
            plan.residual
        );

        plan
    }

    /// Partition a snapshot into creditors and debtors, each sorted by
    /// absolute amount descending
    fn partition(
        &self,
        balances: &BTreeMap<MemberId, Decimal>,
    ) -> (Vec<MemberPosition>, Vec<MemberPosition>) {
        let mut creditors = Vec::new();
        let mut debtors = Vec::new();

        for (member_id, &net) in balances {
            let position = MemberPosition::new(member_id.clone(), net);
            if position.is_creditor(self.tolerance) {
                creditors.push(position);
            } else if position.is_debtor(self.tolerance) {
                debtors.push(position);
            }
        }

        // Stable sorts: ties keep the snapshot's key order
        creditors.sort_by(|a, b| b.abs_net().cmp(&a.abs_net()));
        debtors.sort_by(|a, b| b.abs_net().cmp(&a.abs_net()));

        (creditors, debtors)
    }

    /// Two-pointer greedy match over pre-sorted creditor/debtor lists
    fn match_transfers(
        &self,
        creditors: &[MemberPosition],
        debtors: &[MemberPosition],
    ) -> Vec<Debt> {
        let mut credit_remaining: Vec<Decimal> =
            creditors.iter().map(MemberPosition::abs_net).collect();
        let mut debit_remaining: Vec<Decimal> =
            debtors.iter().map(MemberPosition::abs_net).collect();

        let mut transfers = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < creditors.len() && j < debtors.len() {
            let amount = credit_remaining[i].min(debit_remaining[j]);

            if amount > self.min_transfer {
                transfers.push(Debt {
                    from: debtors[j].member_id.clone(),
                    to: creditors[i].member_id.clone(),
                    amount: money::round_to_cents(amount),
                });
            }

            credit_remaining[i] -= amount;
            debit_remaining[j] -= amount;

            if credit_remaining[i] < self.tolerance {
                i += 1;
            }
            if debit_remaining[j] < self.tolerance {
                j += 1;
            }
        }

        transfers
    }
}

impl Default for DebtSimplifier {
    fn default() -> Self {
        Self::new(money::cent(), money::cent())
    }
}
