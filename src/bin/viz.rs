//! BS Explainer Visualization
//!
//! Terminal rendering of the dashboard: price, Greeks, the price surface over
//! spot × volatility and the delta-vs-spot curve.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bs_explainer::prelude::*;
use bs_explainer::telemetry;

/// Rows and columns shown from the surface grid
const TABLE_STEP: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "bs-viz", version, about = "Render the Black-Scholes explainer in the terminal")]
struct Args {
    /// Dashboard config (TOML)
    #[arg(long, env = "BS_EXPLAINER_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long = "type", value_enum)]
    option_type: Option<OptionType>,

    #[arg(long)]
    spot: Option<f64>,

    #[arg(long)]
    strike: Option<f64>,

    /// Volatility in percent
    #[arg(long)]
    vol_pct: Option<f64>,

    #[arg(long)]
    days: Option<f64>,

    /// Rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate_pct: Option<f64>,
}

impl Args {
    fn controls(&self, config: &DashboardConfig) -> Controls {
        let defaults = Controls::from_config(config);
        Controls {
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            volatility_pct: self.vol_pct.unwrap_or(defaults.volatility_pct),
            maturity_days: self.days.unwrap_or(defaults.maturity_days),
            rate_pct: self.rate_pct.unwrap_or(defaults.rate_pct),
            option_type: self.option_type.unwrap_or(defaults.option_type),
        }
    }
}

fn print_surface(view: &DashboardView) {
    let surface = &view.surface;
    println!("{}:", view.surface_title());
    print!("Vol%\\Spot |");
    for s in surface.spots.iter().step_by(TABLE_STEP) {
        print!(" {:>7.0}", s);
    }
    println!();
    println!("----------+{}", "-".repeat(8 * surface.spots.len().div_ceil(TABLE_STEP)));

    for (vi, vol_pct) in surface.vols_pct().iter().enumerate().step_by(TABLE_STEP) {
        print!("  {:>6.1}  |", vol_pct);
        for si in (0..surface.spots.len()).step_by(TABLE_STEP) {
            print!(" {:>7.2}", surface.prices[[vi, si]]);
        }
        println!();
    }

    if let Some((lo, hi)) = surface.price_range() {
        println!("\n  Price range: {:.2} .. {:.2}", lo, hi);
    }
}

fn print_delta_curve(view: &DashboardView) {
    println!("Delta vs Stock Price:");
    println!("   Spot  |  Delta");
    println!("---------+---------");
    for [spot, delta] in view.delta_curve.points().into_iter().step_by(TABLE_STEP) {
        println!(" {:>7.2} | {:>7.4}", spot, delta);
    }
}

fn run(args: &Args) -> BsResult<()> {
    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let view = DashboardView::compute(&args.controls(&config), &config)?;
    let controls = &view.controls;

    println!("Black-Scholes Visual Explainer");
    println!("==============================\n");
    println!("  Spot:   ${:.2}", controls.spot);
    println!("  Strike: ${:.2}", controls.strike);
    println!("  Vol:    {:.0}%", controls.volatility_pct);
    println!("  Days:   {:.0}", controls.maturity_days);
    println!("  Rate:   {:.0}%\n", controls.rate_pct);

    println!("{} ({})\n", view.headline(), view.moneyness());
    for tile in view.tiles() {
        println!("  {:<6} {:>10}", tile.label, tile.text);
    }
    println!();

    print_surface(&view);
    println!();
    print_delta_curve(&view);

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
