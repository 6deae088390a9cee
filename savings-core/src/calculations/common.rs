//! Common utility functions for savings calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, the usual convention
/// for displaying currency amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-9800)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(95400)), dec!(95400));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Multiplies two values, clamping to [`Decimal::MAX`] or [`Decimal::MIN`]
/// instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::saturating_mul;
///
/// assert_eq!(saturating_mul(dec!(4000), dec!(12)), dec!(48000));
/// assert_eq!(saturating_mul(Decimal::MAX, dec!(2)), Decimal::MAX);
/// ```
pub fn saturating_mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Adds two values, clamping to [`Decimal::MAX`] or [`Decimal::MIN`]
/// instead of overflowing.
pub fn saturating_add(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    // Overflow needs both operands on the same side of zero.
    a.checked_add(b).unwrap_or(if a.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Subtracts `b` from `a`, clamping to [`Decimal::MAX`] or [`Decimal::MIN`]
/// instead of overflowing.
pub fn saturating_sub(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    saturating_add(a, -b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(95400.004)), dec!(95400.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(4600.10)), dec!(4600.10));
    }

    #[test]
    fn round_half_up_carries_into_integer_part() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }

    // =========================================================================
    // floor_at_zero tests
    // =========================================================================

    #[test]
    fn floor_at_zero_clamps_negative_values() {
        assert_eq!(floor_at_zero(dec!(-0.01)), Decimal::ZERO);
    }

    #[test]
    fn floor_at_zero_keeps_zero_and_positive_values() {
        assert_eq!(floor_at_zero(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(floor_at_zero(dec!(0.01)), dec!(0.01));
    }

    // =========================================================================
    // saturating arithmetic tests
    // =========================================================================

    #[test]
    fn saturating_mul_matches_plain_product_in_range() {
        assert_eq!(saturating_mul(dec!(500000), dec!(0.20)), dec!(100000));
    }

    #[test]
    fn saturating_mul_clamps_by_sign_of_product() {
        assert_eq!(saturating_mul(Decimal::MAX, Decimal::MAX), Decimal::MAX);
        assert_eq!(saturating_mul(Decimal::MIN, Decimal::MIN), Decimal::MAX);
        assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
    }

    #[test]
    fn saturating_add_clamps_both_directions() {
        assert_eq!(saturating_add(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(saturating_add(Decimal::MIN, dec!(-1)), Decimal::MIN);
        assert_eq!(saturating_add(Decimal::MAX, Decimal::MIN), Decimal::ZERO);
    }

    #[test]
    fn saturating_sub_of_two_maxima_is_zero() {
        assert_eq!(saturating_sub(Decimal::MAX, Decimal::MAX), Decimal::ZERO);
        assert_eq!(saturating_sub(Decimal::MIN, Decimal::MAX), Decimal::MIN);
    }
}
