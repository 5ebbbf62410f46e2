//! Pricing Models
//!
//! Implements:
//! - Standard normal distribution (CDF/PDF) behind a trait
//! - Black-Scholes closed-form price and Greeks
//! - Broadcasting of array-shaped market inputs

pub mod normal;
pub mod black_scholes;
pub mod broadcast;

pub use normal::*;
pub use black_scholes::*;
pub use broadcast::*;
