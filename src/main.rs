use anyhow::Result;
use br_loan::{QuoteOutcome, QuoteRequest, quote};
use clap::Parser;

#[derive(Parser)]
#[command(name = "br-loan")]
#[command(version, about = "Fixed-rate loan installment simulator (Brazilian Real)")]
struct Cli {
    /// Amount to be borrowed
    #[arg(short, long)]
    principal: String,

    /// Monthly interest rate, as a percentage (e.g., 2 for 2%)
    #[arg(short, long)]
    rate: String,

    /// Number of monthly payments
    #[arg(short, long)]
    months: String,

    /// Output the quote in JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Raw strings go through the same parse/validate path as the library
    // quote action, so the validation message stays in one place
    let request = QuoteRequest {
        principal: cli.principal,
        interest_per_month: cli.rate,
        term_months: cli.months,
    };

    let outcome = quote(&request);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.message());
    }

    if matches!(outcome, QuoteOutcome::Invalid { .. }) {
        std::process::exit(1);
    }

    Ok(())
}
