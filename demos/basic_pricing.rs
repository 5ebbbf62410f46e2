//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use bs_explainer::prelude::*;
use ndarray::array;

fn main() {
    // Option parameters
    let spot = 100.0;
    let strike = 100.0;
    let time = year_fraction(30.0); // 30 calendar days
    let rate = 0.02; // 2% risk-free rate
    let vol = 0.20; // 20% volatility

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.4} years ({:.0} days)", time, time * DAYS_PER_YEAR);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    // Price call and put
    let call_price = bs_price(spot, strike, time, rate, vol, OptionType::Call);
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(spot, strike, time, rate, vol, OptionType::Put);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.2e}", (parity_lhs - parity_rhs).abs());

    // Greeks via the strict engine
    let inputs = MarketInputs::new(spot, strike, time, rate, vol);
    let engine = BlackScholes::new();
    for option_type in [OptionType::Call, OptionType::Put] {
        println!("\n=== Greeks ({}) ===\n", option_type);
        match engine.evaluate(&inputs, option_type) {
            Ok(result) => {
                for (label, value) in result.greeks.named() {
                    println!("{:<6}  {:>8.4}", label, value);
                }
            }
            Err(e) => println!("Could not price: {}", e),
        }
    }

    // Degenerate input: strict rejects, permissive propagates
    println!("\n=== Expiry (T = 0) ===\n");
    let expired = inputs.with_spot(105.0);
    let expired = MarketInputs { time: 0.0, ..expired };
    match engine.price(&expired, OptionType::Call) {
        Ok(p) => println!("Strict:     {:.4}", p),
        Err(e) => println!("Strict:     {}", e),
    }
    match BlackScholes::permissive().price(&expired, OptionType::Call) {
        Ok(p) => println!("Permissive: {:.4}", p),
        Err(e) => println!("Permissive: {}", e),
    }

    // Broadcasting: a vol column against a spot row
    println!("\n=== Call Prices (vol × spot) ===\n");
    let arrays = MarketArrays::from_scalar(&inputs)
        .with_spot(array![[90.0, 100.0, 110.0]])
        .with_vol(array![[0.1], [0.2], [0.4]]);
    match engine.evaluate_array(&arrays, Measure::Price, OptionType::Call) {
        Ok(prices) => println!("{:.4}", prices),
        Err(e) => println!("Could not price grid: {}", e),
    }
}
