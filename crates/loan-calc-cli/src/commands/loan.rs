use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::amortization::{self, LoanRequest};

use crate::input;

/// Arguments shared by the loan commands
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides stdin and individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount financed
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Annual nominal rate as a decimal (0.45 = 45%)
    #[arg(long, allow_hyphen_values = true)]
    pub annual_rate: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, allow_hyphen_values = true)]
    pub months: Option<i64>,

    /// Currency decimal places used for rounding (0-6)
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    pub decimals: i64,

    /// Include the per-installment schedule
    #[arg(long)]
    pub schedule: bool,
}

fn request_from_flags(args: &LoanArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let annual_rate = args
        .annual_rate
        .ok_or("--annual-rate is required (or provide --input)")?;
    let months = args
        .months
        .ok_or("--months is required (or provide --input)")?;

    Ok(LoanRequest {
        principal,
        annual_nominal_rate: annual_rate,
        months,
        generate_schedule: false,
        currency_decimals: args.decimals,
    })
}

/// Pick the request source: file first, then piped stdin, then flags.
fn select_request(
    from_file: Option<LoanRequest>,
    piped: Option<LoanRequest>,
    args: &LoanArgs,
) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let mut request = match from_file.or(piped) {
        Some(request) => request,
        None => request_from_flags(args)?,
    };
    request.generate_schedule |= args.schedule;
    Ok(request)
}

fn build_request(args: LoanArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let from_file: Option<LoanRequest> = match args.input {
        Some(ref path) => Some(input::file::read_json(path)?),
        None => None,
    };
    let piped: Option<LoanRequest> = if from_file.is_none() {
        input::stdin::read_stdin()?
    } else {
        None
    };

    let request = select_request(from_file, piped, &args)?;
    tracing::debug!(
        principal = %request.principal,
        annual_nominal_rate = %request.annual_nominal_rate,
        months = request.months,
        generate_schedule = request.generate_schedule,
        "loan request built"
    );
    Ok(request)
}

pub fn run_calculate(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = build_request(args)?;
    let result = amortization::amortize(&request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut request = build_request(args)?;
    request.generate_schedule = true;
    let result = amortization::amortize(&request)?;
    Ok(serde_json::to_value(result)?)
}
