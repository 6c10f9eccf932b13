//! Main settlement engine
//!
//! Composes ledger aggregation with debt netting: an expense/member snapshot
//! goes in, a settlement plan comes out. Purely synchronous; callers own the
//! snapshot's consistency (a point-in-time read from whatever store holds
//! the records).

use crate::config::Config;
use crate::netting::DebtSimplifier;
use crate::types::SettlementPlan;
use ledger_core::{balance, Expense, Group, Member};

/// Settlement engine
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    /// Debt simplifier
    simplifier: DebtSimplifier,
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Self {
        Self {
            simplifier: DebtSimplifier::from_config(&config),
        }
    }

    /// Settle a snapshot of expenses for the given members.
    pub fn settle(&self, expenses: &[Expense], members: &[Member]) -> SettlementPlan {
        tracing::info!(
            "Settling {} expenses across {} members",
            expenses.len(),
            members.len()
        );

        let balances = balance::net_balances(expenses, members);
        let plan = self.simplifier.plan(&balances);

        tracing::info!(
            "Settlement plan {}: {} transfers, residual {}",
            plan.plan_id,
            plan.transfer_count(),
            plan.residual
        );

        plan
    }

    /// Settle a snapshot after verifying each expense's splits account for
    /// its amount.
    ///
    /// The per-expense check is the write-side invariant the resolvers
    /// uphold; running it here catches hand-edited records before they skew
    /// the plan.
    pub fn settle_checked(
        &self,
        expenses: &[Expense],
        members: &[Member],
    ) -> crate::Result<SettlementPlan> {
        for expense in expenses {
            expense.check_splits()?;
        }
        Ok(self.settle(expenses, members))
    }

    /// Settle only the records belonging to `group`.
    pub fn settle_group(
        &self,
        group: &Group,
        expenses: &[Expense],
        members: &[Member],
    ) -> SettlementPlan {
        let group_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|e| e.group_id == group.group_id)
            .cloned()
            .collect();
        let group_members: Vec<Member> = members
            .iter()
            .filter(|m| m.group_id == group.group_id)
            .cloned()
            .collect();

        self.settle(&group_expenses, &group_members)
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
