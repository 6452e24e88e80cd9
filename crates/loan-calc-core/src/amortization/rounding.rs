use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Round to `decimals` places with round-half-to-even (banker's rounding).
///
/// The result always carries exactly `decimals` places, and a zero result is
/// never negative, so `-0.004` becomes `0.00`.
pub fn round_currency(value: Money, decimals: u32) -> Money {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(decimals);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_rounds_to_even() {
        assert_eq!(round_currency(dec!(2.345), 2), dec!(2.34));
        assert_eq!(round_currency(dec!(2.355), 2), dec!(2.36));
        assert_eq!(round_currency(dec!(0.5), 0), dec!(0));
        assert_eq!(round_currency(dec!(1.5), 0), dec!(2));
        assert_eq!(round_currency(dec!(-2.345), 2), dec!(-2.34));
    }

    #[test]
    fn test_non_midpoint_rounds_to_nearest() {
        assert_eq!(round_currency(dec!(10501.23009), 2), dec!(10501.23));
        assert_eq!(round_currency(dec!(1.0051), 2), dec!(1.01));
    }

    #[test]
    fn test_pads_to_requested_scale() {
        let v = round_currency(dec!(10000), 2);
        assert_eq!(v.scale(), 2);
        assert_eq!(v.to_string(), "10000.00");
    }

    #[test]
    fn test_negative_zero_is_cleared() {
        let v = round_currency(dec!(-0.004), 2);
        assert!(v.is_zero());
        assert!(v.is_sign_positive());
        assert_eq!(v.to_string(), "0.00");
    }

    #[test]
    fn test_six_decimals() {
        assert_eq!(round_currency(dec!(1.23456789), 6), dec!(1.234568));
    }
}
