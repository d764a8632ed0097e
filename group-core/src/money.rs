//! Money rounding helpers shared by the netting and settlement steps
//!
//! All rounding to the minor currency unit goes through [`round_minor`]
//! so both components break ties the same way. The strategy is
//! **round-half-away-from-zero**: 0.005 → 0.01 and −0.005 → −0.01.
//! Comparisons against zero use an absolute tolerance of one minor unit
//! (0.01) to treat division residues as settled.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of minor-unit decimal places (cents/pence)
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Absolute tolerance below which a balance counts as settled (0.01)
pub fn settled_tolerance() -> Decimal {
    Decimal::new(1, MINOR_UNIT_SCALE)
}

/// Round an amount to the minor currency unit, half away from zero
pub fn round_minor(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Check whether a balance is within the settled tolerance of zero
pub fn is_settled(value: Decimal) -> bool {
    value.abs() <= settled_tolerance()
}
