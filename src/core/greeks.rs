//! Option Greeks
//!
//! First and second order sensitivities, plus the full pricing result.

use serde::{Deserialize, Serialize};

use super::{MarketInputs, OptionType};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ per 1% vol move
    pub vega: f64,
    /// Theta: dV/dt per calendar day
    pub theta: f64,
    /// Rho: dV/dr per 1% rate move
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// (name, value) pairs in display order
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Vega", self.vega),
            ("Theta", self.theta),
            ("Rho", self.rho),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.named().iter().all(|(_, v)| v.is_finite())
    }
}

/// Price and Greeks for one option evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub option_type: OptionType,
    pub inputs: MarketInputs,
    pub price: f64,
    pub greeks: Greeks,
}

impl PricingResult {
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.greeks.is_finite()
    }
}
