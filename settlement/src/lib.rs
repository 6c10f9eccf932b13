//! GoDutch Settlement
//!
//! Debt simplification for shared-expense groups: turns a net-balance
//! snapshot into the transfers that settle everyone up.
//!
//! # Pipeline
//!
//! 1. **Aggregate**: `ledger-core` derives net balances from the expense
//!    snapshot
//! 2. **Partition**: members become creditors or debtors (a one-cent
//!    tolerance absorbs rounding slack)
//! 3. **Match**: greedy largest-creditor/largest-debtor pairing records at
//!    most N − 1 transfers for N unsettled balances
//!
//! Everything is a pure, one-shot batch computation: no state machine, no
//! I/O, no failure path for well-formed snapshots.
//!
//! # Example
//!
//! ```
//! use ledger_core::MemberId;
//! use rust_decimal::Decimal;
//! use settlement::DebtSimplifier;
//! use std::collections::BTreeMap;
//!
//! let mut balances = BTreeMap::new();
//! balances.insert(MemberId::new("alice"), Decimal::new(5000, 2));
//! balances.insert(MemberId::new("bob"), Decimal::new(-1000, 2));
//! balances.insert(MemberId::new("carol"), Decimal::new(-4000, 2));
//!
//! let transfers = DebtSimplifier::default().simplify(&balances);
//! assert_eq!(transfers.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod netting;
pub mod types;

// Re-exports
pub use config::Config;
pub use engine::SettlementEngine;
pub use error::{Error, Result};
pub use netting::DebtSimplifier;
pub use types::{Debt, MemberPosition, SettlementPlan};
