//! GoDutch Ledger Core
//!
//! Shared-expense ledger engine: split resolution and balance aggregation
//! over plain in-memory expense snapshots.
//!
//! # Architecture
//!
//! - **Split Resolver**: turns a division strategy (equal, percentage,
//!   shares, exact) into concrete per-member amounts
//! - **Ledger Aggregator**: derives totals paid and net balances from an
//!   expense snapshot
//! - **Pure computation**: no I/O, no locks, no hidden state; callers own
//!   persistence and hand in read-only snapshots
//!
//! # Invariants
//!
//! - Money conservation: Σ(net balances) ≈ 0 whenever each expense's splits
//!   sum to its amount within a cent
//! - Rounding: half away from zero at 2 decimal places, applied per member
//!   after the proportional computation
//! - Determinism: same snapshot → same result, on every call
//!
//! The core never fails on structurally valid input: unknown member ids
//! accumulate under a zero-default entry, zero percentage/share sums degrade
//! to all-zero splits, and empty inputs yield empty results.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod balance;
pub mod error;
pub mod money;
pub mod split;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::{CurrencyCode, Expense, Group, Member, MemberId, Split, SplitType};
