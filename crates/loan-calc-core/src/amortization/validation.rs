use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::LoanCalcResult;

use super::schedule::LoanParameters;

/// Largest supported number of currency decimal places.
pub const MAX_CURRENCY_DECIMALS: i64 = 6;

/// Check every parameter bound, collecting all violations in rule order.
///
/// Counts are signed so that negative inputs reach these rules instead of
/// failing deserialisation on their own.
pub fn validate(params: &LoanParameters) -> LoanCalcResult<()> {
    let mut errors: Vec<String> = Vec::new();

    if params.principal <= Decimal::ZERO {
        errors.push("Principal must be greater than 0.".into());
    }

    if params.months <= 0 {
        errors.push("Months must be greater than 0.".into());
    }

    if params.annual_nominal_rate < Decimal::ZERO {
        errors.push("Annual nominal rate cannot be negative.".into());
    }

    if !(0..=MAX_CURRENCY_DECIMALS).contains(&params.currency_decimals) {
        errors.push(format!(
            "Currency decimals must be between 0 and {MAX_CURRENCY_DECIMALS}."
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid() -> LoanParameters {
        LoanParameters {
            principal: dec!(1000),
            annual_nominal_rate: dec!(0.1),
            months: 12,
            currency_decimals: 2,
        }
    }

    #[test]
    fn test_valid_parameters_pass() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn test_zero_rate_and_zero_decimals_are_allowed() {
        let mut p = valid();
        p.annual_nominal_rate = Decimal::ZERO;
        p.currency_decimals = 0;
        assert!(validate(&p).is_ok());

        p.currency_decimals = MAX_CURRENCY_DECIMALS;
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn test_negative_principal_rejected() {
        let mut p = valid();
        p.principal = dec!(-5);
        let err = validate(&p).unwrap_err();
        assert_eq!(err.errors(), ["Principal must be greater than 0."]);
    }

    #[test]
    fn test_decimals_out_of_range_rejected() {
        let mut p = valid();
        p.currency_decimals = 7;
        let err = validate(&p).unwrap_err();
        assert_eq!(err.errors(), ["Currency decimals must be between 0 and 6."]);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let mut p = valid();
        p.months = -3;
        p.currency_decimals = -1;
        let err = validate(&p).unwrap_err();
        assert_eq!(
            err.errors(),
            [
                "Months must be greater than 0.",
                "Currency decimals must be between 0 and 6.",
            ]
        );
    }

    #[test]
    fn test_all_violations_reported_in_order() {
        let p = LoanParameters {
            principal: Decimal::ZERO,
            annual_nominal_rate: dec!(-0.1),
            months: 0,
            currency_decimals: 9,
        };
        let err = validate(&p).unwrap_err();
        assert_eq!(
            err.errors(),
            [
                "Principal must be greater than 0.",
                "Months must be greater than 0.",
                "Annual nominal rate cannot be negative.",
                "Currency decimals must be between 0 and 6.",
            ]
        );
    }
}
