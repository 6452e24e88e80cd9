use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::monthly_rate;
use crate::types::*;
use crate::LoanCalcResult;

use super::schedule::{calculate, default_currency_decimals, LoanParameters, LoanResult};

/// Inbound loan calculation request, as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub annual_nominal_rate: Rate,
    pub months: i64,
    /// Return the per-installment breakdown instead of totals only.
    #[serde(default)]
    pub generate_schedule: bool,
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: i64,
}

impl LoanRequest {
    pub fn parameters(&self) -> LoanParameters {
        LoanParameters {
            principal: self.principal,
            annual_nominal_rate: self.annual_nominal_rate,
            months: self.months,
            currency_decimals: self.currency_decimals,
        }
    }
}

/// Run a loan calculation and wrap it in the standard output envelope.
pub fn amortize(request: &LoanRequest) -> LoanCalcResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let params = request.parameters();
    let rate = monthly_rate(params.annual_nominal_rate);

    let result = calculate(&params, request.generate_schedule)?;

    let mut warnings: Vec<String> = Vec::new();
    match &result.schedule {
        Some(schedule) => {
            if let Some(last) = schedule.last() {
                let delta = last.payment - result.monthly_payment;
                if !delta.is_zero() {
                    warnings.push(format!(
                        "Final installment adjusted by {delta} to close the balance at zero"
                    ));
                }
            }
        }
        None if !rate.is_zero() => {
            warnings.push(
                "Totals derived from monthly_payment x months; the amortization schedule may differ by rounding"
                    .into(),
            );
        }
        None => {}
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "French annuity (nominal monthly rate)",
        &serde_json::json!({
            "principal": params.principal.to_string(),
            "annual_nominal_rate": params.annual_nominal_rate.to_string(),
            "monthly_rate": rate.to_string(),
            "months": params.months,
            "currency_decimals": params.currency_decimals,
            "generate_schedule": request.generate_schedule,
        }),
        warnings,
        elapsed,
        result,
    ))
}
