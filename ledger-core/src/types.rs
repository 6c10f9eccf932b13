//! Core types for the shared-expense ledger
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Plain-data exchange with the record store that owns them
//! - Memory safety (no unsafe code)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Member identifier (opaque id minted by the group store)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    /// Create new member ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency code
///
/// Informational only inside the core: every amount handed to the ledger is
/// already expressed in the group's accounting currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create new currency code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expense-sharing group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub group_id: Uuid,

    /// Display name
    pub name: String,

    /// Accounting currency all amounts are normalized to
    pub default_currency: CurrencyCode,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Group member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Member ID (unique within a group)
    pub id: MemberId,

    /// Group this member belongs to
    pub group_id: Uuid,

    /// Display name
    pub name: String,

    /// Member's home currency
    pub home_currency: CurrencyCode,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Division strategy for an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Equal weight per member
    Equal,
    /// Percentage points per member
    Percentage,
    /// Proportional share count per member
    Shares,
    /// Exact amount per member
    Exact,
}

/// One member's share of one expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Member this share belongs to
    pub member_id: MemberId,

    /// Division strategy that produced this share
    pub split_type: SplitType,

    /// Raw strategy input (weight, percentage points, share count, or the
    /// exact amount itself)
    pub value: Decimal,

    /// Final monetary amount, rounded to 2 decimal places; derived by the
    /// resolver, never hand-edited
    pub resolved_amount: Decimal,
}

/// A recorded expense: paid by exactly one member on behalf of a set of
/// members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID
    pub expense_id: Uuid,

    /// Group this expense belongs to
    pub group_id: Uuid,

    /// Member who fronted the money
    pub paid_by: MemberId,

    /// Amount in the group's accounting currency (normalization is the
    /// currency collaborator's job, done before the record reaches the core)
    pub amount: Decimal,

    /// Currency the expense was originally entered in
    pub currency: CurrencyCode,

    /// Exchange rate that was applied to normalize `amount`
    pub exchange_rate: Decimal,

    /// Free-form description
    pub description: String,

    /// Optional category label
    pub category: Option<String>,

    /// When the expense occurred
    pub date: DateTime<Utc>,

    /// Per-member cost allocation; the authoritative division of `amount`
    pub splits: Vec<Split>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Sum of the resolved split amounts.
    pub fn splits_total(&self) -> Decimal {
        self.splits.iter().map(|s| s.resolved_amount).sum()
    }

    /// Write-side invariant check: the splits must account for the expense
    /// amount to within a cent.
    ///
    /// The read-side aggregator never re-validates; this is for callers
    /// persisting a new or edited expense.
    pub fn check_splits(&self) -> crate::Result<()> {
        let total = self.splits_total();
        if (total - self.amount).abs() > crate::money::cent() {
            return Err(crate::Error::InvariantViolation(format!(
                "expense {}: splits total {} does not match amount {}",
                self.expense_id, total, self.amount
            )));
        }
        Ok(())
    }
}
