//! Core types for settlement planning

use chrono::{DateTime, Utc};
use ledger_core::MemberId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single directed settlement transfer
///
/// Only valid relative to the balance snapshot it was computed from; it goes
/// stale the instant any expense changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// Debtor member (pays)
    pub from: MemberId,

    /// Creditor member (receives)
    pub to: MemberId,

    /// Transfer amount (positive, 2 decimal places)
    pub amount: Decimal,
}

/// A member's signed net position within one balance snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPosition {
    /// Member ID
    pub member_id: MemberId,

    /// Net balance (positive = owed money, negative = owes money)
    pub net: Decimal,
}

impl MemberPosition {
    /// Create new position
    pub fn new(member_id: MemberId, net: Decimal) -> Self {
        Self { member_id, net }
    }

    /// Check if creditor (owed more than `tolerance`)
    pub fn is_creditor(&self, tolerance: Decimal) -> bool {
        self.net > tolerance
    }

    /// Check if debtor (owes more than `tolerance`)
    pub fn is_debtor(&self, tolerance: Decimal) -> bool {
        self.net < -tolerance
    }

    /// Check if settled (within `tolerance` of zero)
    pub fn is_settled(&self, tolerance: Decimal) -> bool {
        !self.is_creditor(tolerance) && !self.is_debtor(tolerance)
    }

    /// Get absolute net amount
    pub fn abs_net(&self) -> Decimal {
        self.net.abs()
    }
}

/// Settlement plan computed from one balance snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Plan ID
    pub plan_id: Uuid,

    /// Number of balances examined
    pub member_count: usize,

    /// Creditors entering the match
    pub creditor_count: usize,

    /// Debtors entering the match
    pub debtor_count: usize,

    /// Transfers that settle the snapshot
    pub transfers: Vec<Debt>,

    /// Total owed to creditors
    pub total_credit: Decimal,

    /// Total owed by debtors
    pub total_debit: Decimal,

    /// Total across recorded transfers
    pub total_transferred: Decimal,

    /// Imbalance left unmatched (positive = creditors left short, negative =
    /// debtors left owing); ~0 when the snapshot conserved money
    pub residual: Decimal,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl SettlementPlan {
    /// Number of transfers in the plan
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Check whether the snapshot was matched completely within `tolerance`
    pub fn is_fully_settled(&self, tolerance: Decimal) -> bool {
        self.residual.abs() <= tolerance
    }
}
