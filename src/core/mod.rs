//! Core data types for Black-Scholes pricing
//!
//! Defines fundamental types:
//! - OptionType: call/put selector
//! - MarketInputs: spot, strike, maturity, rate, volatility
//! - Greeks / PricingResult: evaluation outputs
//! - BsError: error taxonomy

pub mod option;
pub mod greeks;
pub mod error;

pub use option::*;
pub use greeks::*;
pub use error::*;
