use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time_value::{annuity_payment, monthly_rate};
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

use super::rounding::round_currency;
use super::validation::validate;

pub(crate) fn default_currency_decimals() -> i64 {
    2
}

/// Inputs for a fixed-installment loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount financed, must be > 0.
    pub principal: Money,
    /// Annual nominal rate as a fraction (0.45 = 45%), must be >= 0.
    pub annual_nominal_rate: Rate,
    /// Number of monthly installments, must be > 0.
    pub months: i64,
    /// Decimal places used for every rounding step, in [0, 6].
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: i64,
}

/// One row of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule.
    pub number: i64,
    pub payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// Balance left after this installment.
    pub remaining_principal: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    /// The constant payment; the first installment's payment when a schedule exists.
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Installment>>,
}

/// Compute the constant payment and, when asked, the full schedule.
///
/// Without a schedule the totals come straight from `payment * months`. With
/// one, totals are summed over the installments, whose last row absorbs all
/// rounding drift so the balance closes at exactly zero. The two paths can
/// therefore report slightly different totals for the same loan.
pub fn calculate(params: &LoanParameters, generate_schedule: bool) -> LoanCalcResult<LoanResult> {
    if let Err(e) = validate(params) {
        tracing::debug!(errors = ?e.errors(), "loan parameters rejected");
        return Err(e);
    }

    // Validated to [0, 6]
    let decimals = params.currency_decimals as u32;
    let rate = monthly_rate(params.annual_nominal_rate);
    let payment = round_currency(annuity_payment(params.principal, rate, params.months), decimals);

    tracing::debug!(
        principal = %params.principal,
        monthly_rate = %rate,
        months = params.months,
        payment = %payment,
        linear = rate.is_zero(),
        "derived constant payment"
    );

    if !generate_schedule {
        let total_paid = round_currency(payment * Decimal::from(params.months), decimals);
        let total_interest = round_currency(total_paid - params.principal, decimals);

        return Ok(LoanResult {
            monthly_payment: payment,
            total_paid,
            total_interest,
            schedule: None,
        });
    }

    let schedule = build_schedule(params, rate, payment, decimals);

    let total_interest = round_currency(
        schedule.iter().map(|i| i.interest_portion).sum(),
        decimals,
    );
    let total_paid = round_currency(schedule.iter().map(|i| i.payment).sum(), decimals);
    let monthly_payment = schedule.first().map_or(payment, |i| i.payment);

    Ok(LoanResult {
        monthly_payment,
        total_paid,
        total_interest,
        schedule: Some(schedule),
    })
}

fn build_schedule(
    params: &LoanParameters,
    rate: Rate,
    payment: Money,
    decimals: u32,
) -> Vec<Installment> {
    let mut remaining = params.principal;
    let mut schedule = Vec::with_capacity(params.months as usize);

    for number in 1..=params.months {
        let interest = if rate.is_zero() {
            round_currency(Decimal::ZERO, decimals)
        } else {
            round_currency(remaining * rate, decimals)
        };

        // The last installment repays whatever is left, closing the balance at zero
        let (payment, principal_portion) = if number == params.months {
            let principal_portion = round_currency(remaining, decimals);
            (round_currency(principal_portion + interest, decimals), principal_portion)
        } else {
            (payment, payment - interest)
        };

        remaining = round_currency(remaining - principal_portion, decimals);

        tracing::trace!(
            number,
            payment = %payment,
            interest = %interest,
            principal = %principal_portion,
            remaining = %remaining,
            "installment"
        );

        schedule.push(Installment {
            number,
            payment,
            interest_portion: interest,
            principal_portion,
            remaining_principal: remaining,
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(principal: Money, rate: Rate, months: i64) -> LoanParameters {
        LoanParameters {
            principal,
            annual_nominal_rate: rate,
            months,
            currency_decimals: 2,
        }
    }

    #[test]
    fn test_zero_rate_linear_schedule() {
        let result = calculate(&params(dec!(100000), Decimal::ZERO, 10), true).unwrap();
        assert_eq!(result.monthly_payment, dec!(10000.00));
        assert_eq!(result.total_paid, dec!(100000.00));
        assert_eq!(result.total_interest, Decimal::ZERO);

        let sched = result.schedule.unwrap();
        assert_eq!(sched.len(), 10);
        for (i, inst) in sched.iter().enumerate() {
            assert_eq!(inst.number, i as i64 + 1);
            assert_eq!(inst.interest_portion, Decimal::ZERO);
            assert_eq!(inst.principal_portion, dec!(10000));
        }
        assert_eq!(sched[4].remaining_principal, dec!(50000));
        assert_eq!(sched[9].remaining_principal, Decimal::ZERO);
    }

    #[test]
    fn test_totals_only_omits_schedule() {
        let result = calculate(&params(dec!(100000), dec!(0.45), 12), false).unwrap();
        assert_eq!(result.monthly_payment, dec!(10501.23));
        assert_eq!(result.total_paid, dec!(126014.76));
        assert_eq!(result.total_interest, dec!(26014.76));
        assert!(result.schedule.is_none());
    }

    #[test]
    fn test_first_installment_split() {
        let result = calculate(&params(dec!(100000), dec!(0.45), 12), true).unwrap();
        let first = &result.schedule.unwrap()[0];
        // 100,000 * 0.0375 = 3,750 interest in month one
        assert_eq!(first.interest_portion, dec!(3750.00));
        assert_eq!(first.principal_portion, dec!(6751.23));
        assert_eq!(first.remaining_principal, dec!(93248.77));
    }

    #[test]
    fn test_terminal_installment_absorbs_drift() {
        let result = calculate(&params(dec!(10000), dec!(0.10), 10), true).unwrap();
        let sched = result.schedule.unwrap();
        let last = sched.last().unwrap();

        assert_eq!(result.monthly_payment, dec!(1046.40));
        assert_eq!(last.payment, dec!(1046.45));
        assert_eq!(last.interest_portion, dec!(8.65));
        assert_eq!(last.principal_portion, dec!(1037.80));
        assert_eq!(last.remaining_principal, Decimal::ZERO);
        assert_eq!(result.total_paid, dec!(10464.05));
        assert_eq!(result.total_interest, dec!(464.05));
    }

    #[test]
    fn test_single_month_loan() {
        let result = calculate(&params(dec!(1000), dec!(0.12), 1), true).unwrap();
        let sched = result.schedule.unwrap();
        assert_eq!(sched.len(), 1);
        assert_eq!(sched[0].payment, dec!(1010.00));
        assert_eq!(sched[0].interest_portion, dec!(10.00));
        assert_eq!(sched[0].principal_portion, dec!(1000.00));
        assert_eq!(sched[0].remaining_principal, Decimal::ZERO);
    }

    #[test]
    fn test_zero_decimals() {
        let mut p = params(dec!(1000), dec!(0.06), 3);
        p.currency_decimals = 0;

        let result = calculate(&p, true).unwrap();
        let sched = result.schedule.unwrap();
        assert_eq!(result.monthly_payment, dec!(337));
        assert_eq!(sched[2].payment, dec!(336));
        assert_eq!(result.total_paid, dec!(1010));
        assert_eq!(result.total_interest, dec!(10));

        let fast = calculate(&p, false).unwrap();
        assert_eq!(fast.total_paid, dec!(1011));
        assert_eq!(fast.total_interest, dec!(11));
    }

    #[test]
    fn test_invalid_input_yields_no_result() {
        let err = calculate(&params(Decimal::ZERO, dec!(0.1), 12), true).unwrap_err();
        assert_eq!(err.errors(), ["Principal must be greater than 0."]);
    }

    #[test]
    fn test_default_currency_decimals_from_json() {
        let p: LoanParameters = serde_json::from_str(
            r#"{"principal": "1000", "annual_nominal_rate": "0.1", "months": 12}"#,
        )
        .unwrap();
        assert_eq!(p.currency_decimals, 2);
    }

    #[test]
    fn test_schedule_omitted_from_json_when_absent() {
        let result = calculate(&params(dec!(1000), dec!(0.1), 12), false).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("schedule").is_none());
        assert_eq!(json["monthly_payment"], "87.92");
    }
}
