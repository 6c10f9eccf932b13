//! Cent-level rounding helpers
//!
//! Every monetary comparison in the engine happens at 2 decimal places with
//! a one-cent tolerance; these helpers keep that rule in one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the accounting currency's minor unit
pub const SCALE: u32 = 2;

/// Round to the nearest cent, half away from zero.
///
/// Applied to each member's amount independently after the proportional
/// computation, never to accumulated intermediates.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// One cent: the tolerance used at every comparison point.
pub fn cent() -> Decimal {
    Decimal::new(1, 2)
}

/// True when `value` is within `tolerance` of zero.
pub fn approx_zero(value: Decimal, tolerance: Decimal) -> bool {
    value.abs() <= tolerance
}
