mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::loan::LoanArgs;
use loan_calc_core::ValidationError;

/// French-method loan amortization calculator
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "French-method loan amortization with decimal precision",
    long_about = "Computes the constant monthly payment of a fixed-installment loan \
                  using the French annuity method, with totals or a full \
                  per-installment schedule. All arithmetic is fixed-point decimal."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation steps to stderr (overridden by LOANCALC_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly payment and totals (add --schedule for installments)
    Calculate(LoanArgs),
    /// Calculate the full amortization schedule
    Schedule(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LOANCALC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::loan::run_calculate(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            if let Some(validation) = e.downcast_ref::<ValidationError>() {
                for msg in validation.errors() {
                    eprintln!("{}: {}", "error".red().bold(), msg);
                }
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            process::exit(1);
        }
    }
}
