//! French (constant-payment) loan amortization.
//!
//! `schedule::calculate` is the pure engine; `request::amortize` is the
//! JSON-facing use case that wraps it in a `ComputationOutput` envelope.

pub mod request;
pub mod rounding;
pub mod schedule;
pub mod validation;

pub use request::{amortize, LoanRequest};
pub use schedule::{calculate, Installment, LoanParameters, LoanResult};
