use napi::Result as NapiResult;
use napi_derive::napi;

use loan_calc_core::amortization::{self, LoanRequest};
use loan_calc_core::ValidationError;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Validation failures come back as `{"errors": [...]}` in the error reason,
/// so the JS side can map them onto a 400-class response.
fn validation_error(e: ValidationError) -> napi::Error {
    match serde_json::to_string(&e) {
        Ok(body) => napi::Error::from_reason(body),
        Err(ser) => to_napi_error(ser),
    }
}

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::amortize(&input).map_err(validation_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn loan_schedule(input_json: String) -> NapiResult<String> {
    let mut input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.generate_schedule = true;
    let output = amortization::amortize(&input).map_err(validation_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
