//! Common utility functions for salary tax calculations.
//!
//! This module provides shared functionality used across the calculator and
//! the presentation layer, including clamping and rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to whole rupees using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero. The calculator itself
/// never rounds; this is for presentation.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(89249.49)), dec!(89249));
/// assert_eq!(round_to_rupee(dec!(89249.50)), dec!(89250));
/// assert_eq!(round_to_rupee(dec!(-2400.5)), dec!(-2401)); // Away from zero
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(50), dec!(40)), dec!(50));
/// assert_eq!(max(dec!(0), dec!(-75000)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::min;
///
/// assert_eq!(min(dec!(1125000), dec!(800000)), dec!(800000));
/// assert_eq!(min(dec!(-1), dec!(0)), dec!(-1));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
