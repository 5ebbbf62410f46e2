//! BS Explainer CLI
//!
//! Prices one European option and prints its Greeks.
//!
//! ```text
//! bs-cli --spot 100 --strike 100 --days 30 --rate 0.02 --vol 0.2 --type put
//! bs-cli --spot 100 --strike 95 --expiry 2026-12-18 --vol 0.25 --json
//! ```

use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::Parser;

use bs_explainer::dashboard::{format_headline, greek_tiles};
use bs_explainer::prelude::*;
use bs_explainer::telemetry;

#[derive(Debug, Parser)]
#[command(name = "bs-cli", version, about = "Black-Scholes price and Greeks")]
struct Args {
    /// Spot price (S)
    #[arg(long)]
    spot: f64,

    /// Strike price (K)
    #[arg(long)]
    strike: f64,

    /// Annualized volatility as a fraction (0.2 = 20%)
    #[arg(long)]
    vol: f64,

    /// Annualized risk-free rate as a fraction
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,

    /// Calendar days to maturity
    #[arg(long, conflicts_with = "expiry", required_unless_present = "expiry")]
    days: Option<f64>,

    /// Expiry date (YYYY-MM-DD), counted from today
    #[arg(long)]
    expiry: Option<NaiveDate>,

    #[arg(long = "type", value_enum, default_value_t = OptionType::Call)]
    option_type: OptionType,

    /// Skip input validation and let NaN/Inf propagate
    #[arg(long)]
    permissive: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn time(&self) -> f64 {
        match (self.days, self.expiry) {
            (Some(days), _) => year_fraction(days),
            (None, Some(expiry)) => year_fraction_between(Utc::now().date_naive(), expiry),
            (None, None) => f64::NAN,
        }
    }

    fn policy(&self) -> ValidationPolicy {
        if self.permissive {
            ValidationPolicy::Permissive
        } else {
            ValidationPolicy::Strict
        }
    }
}

fn run(args: &Args) -> BsResult<()> {
    let inputs = MarketInputs::new(args.spot, args.strike, args.time(), args.rate, args.vol);
    tracing::debug!(?inputs, option_type = %args.option_type, "pricing");

    let engine = BlackScholes::new().with_policy(args.policy());
    let result = engine.evaluate(&inputs, args.option_type)?;

    if !result.is_finite() {
        tracing::warn!("result contains non-finite values");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Black-Scholes Pricing");
    println!("=====================\n");
    println!("  Spot:   ${:.2}", inputs.spot);
    println!("  Strike: ${:.2}", inputs.strike);
    println!("  Time:   {:.4} years ({:.0} days)", inputs.time, inputs.time * DAYS_PER_YEAR);
    println!("  Rate:   {:.2}%", inputs.rate * 100.0);
    println!("  Vol:    {:.2}%\n", inputs.vol * 100.0);

    println!("{}\n", format_headline(&result));
    for tile in greek_tiles(&result) {
        println!("  {:<6} {:>10}", tile.label, tile.text);
    }

    Ok(())
}

fn main() -> ExitCode {
    telemetry::init_tracing("info");
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
