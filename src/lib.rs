//! # BS Explainer - Black-Scholes Pricing and Greeks
//!
//! European option prices and risk sensitivities under the Black-Scholes
//! model, plus the data behind an interactive explainer dashboard.
//!
//! ## Overview
//!
//! The pricing core is a set of closed-form formulas:
//! - **Price**: `S·Φ(d1) − K·e^(−rT)·Φ(d2)` for calls, the mirror for puts
//! - **Greeks**: delta, gamma, vega (per 1%), theta (per day), rho (per 1%)
//!
//! Every evaluation is a pure function of `(S, K, T, r, sigma)` and the option
//! type. Nothing is cached and nothing is shared, so evaluations can run on
//! any number of threads.
//!
//! ## Key Components
//!
//! - **Core**: `OptionType`, `MarketInputs`, `Greeks`, `PricingResult`, `BsError`
//! - **Normal distribution**: `NormalDistribution` trait, erfc-based default
//! - **Black-Scholes**: free functions and the policy-aware `BlackScholes` engine
//! - **Broadcasting**: `MarketArrays` for surface and curve grids
//! - **Dashboard**: controls, price surface, delta curve, formatted view
//!
//! ## Usage
//!
//! ```rust
//! use bs_explainer::prelude::*;
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 30.0 / 365.0, 0.02, 0.20);
//!
//! // Strict engine: degenerate inputs are rejected
//! let result = BlackScholes::new().evaluate(&inputs, OptionType::Call).unwrap();
//! assert!((result.price - 2.368).abs() < 1e-3);
//!
//! // Free functions: raw formulas, NaN/Inf propagate
//! let put = bs_price(100.0, 100.0, 30.0 / 365.0, 0.02, 0.20, OptionType::Put);
//! assert!((result.price - put - (100.0 - 100.0 * inputs.discount_factor())).abs() < 1e-10);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American exercise or dividends
//! - Implied volatility or calibration
//! - Rendering beyond the optional egui dashboard binary

pub mod core;
pub mod dashboard;
pub mod models;
pub mod telemetry;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        year_fraction, year_fraction_between, BsError, BsResult, Greeks, MarketInputs, OptionType,
        PricingResult, DAYS_PER_YEAR,
    };

    // Normal distribution
    pub use crate::models::{norm_cdf, norm_pdf, AbramowitzStegun, NormalDistribution, StandardNormal};

    // Black-Scholes
    pub use crate::models::{
        d1, d2, delta as bs_delta, gamma as bs_gamma, price as bs_price, rho as bs_rho,
        theta as bs_theta, vega as bs_vega, BlackScholes, Measure, ValidationPolicy,
    };

    // Broadcasting
    pub use crate::models::MarketArrays;

    // Dashboard
    pub use crate::dashboard::{
        Controls, DashboardConfig, DashboardView, DeltaCurve, GridConfig, PriceSurface,
    };
}

// Re-export main types at crate root
pub use crate::core::{BsError, BsResult};
pub use crate::models::{BlackScholes, ValidationPolicy};
