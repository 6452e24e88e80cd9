//! Fixed-point annuity arithmetic.
//!
//! Everything here stays in `rust_decimal::Decimal`. Powers are integer-only
//! and computed by repeated squaring, so no value ever passes through `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Nominal monthly rate: the annual nominal rate divided by 12.
///
/// This is not the effective monthly rate `(1 + annual)^(1/12) - 1`; the two
/// diverge for any non-zero rate and only the nominal one is used here.
pub fn monthly_rate(annual_nominal_rate: Rate) -> Rate {
    annual_nominal_rate / MONTHS_PER_YEAR
}

/// Integer power of a decimal by exponentiation by squaring.
///
/// Negative exponents take the reciprocal of the positive power. When the
/// positive power overflows the 96-bit mantissa the result saturates: to
/// `Decimal::MAX` for positive exponents, and to zero for negative ones, whose
/// true value is then below decimal resolution.
pub fn powi(base: Decimal, exponent: i64) -> Decimal {
    if exponent == 0 {
        return Decimal::ONE;
    }

    let positive = checked_powu(base, exponent.unsigned_abs());

    if exponent > 0 {
        return positive.unwrap_or(Decimal::MAX);
    }

    match positive {
        Some(p) => Decimal::ONE.checked_div(p).unwrap_or(Decimal::MAX),
        None => Decimal::ZERO,
    }
}

fn checked_powu(base: Decimal, mut n: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;

    while n > 0 {
        if n & 1 == 1 {
            result = result.checked_mul(factor)?;
        }
        n >>= 1;
        // The final squaring is never used; skipping it avoids a spurious overflow.
        if n > 0 {
            factor = factor.checked_mul(factor)?;
        }
    }

    Some(result)
}

/// Unrounded constant payment for a French-method loan.
///
/// `principal / months` when the rate is zero, otherwise the annuity formula
/// `P * r / (1 - (1 + r)^(-n))`. `months` must be at least 1.
pub fn annuity_payment(principal: Money, monthly_rate: Rate, months: i64) -> Money {
    let n = Decimal::from(months);

    if monthly_rate.is_zero() {
        return principal / n;
    }

    let discount = powi(Decimal::ONE + monthly_rate, -months);
    let denominator = Decimal::ONE - discount;

    // Rate too small to move (1 + r)^(-n) off one at 28 digits
    if denominator <= Decimal::ZERO {
        return principal / n;
    }

    principal * monthly_rate / denominator
}
