//! Slider-driven dashboard controls
//!
//! The dashboard collects values in display units (volatility and rate in
//! percent, maturity in calendar days) and converts them to the fractional
//! units the pricing formulas expect.

use serde::{Deserialize, Serialize};

use super::config::{ControlRanges, DashboardConfig};
use crate::core::{year_fraction, MarketInputs, OptionType};

/// Current control values in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub spot: f64,
    pub strike: f64,
    pub volatility_pct: f64,
    pub maturity_days: f64,
    pub rate_pct: f64,
    pub option_type: OptionType,
}

impl Default for Controls {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl Controls {
    /// Every slider at its configured start value
    pub fn from_config(config: &DashboardConfig) -> Self {
        let ranges = &config.controls;
        Self {
            spot: ranges.spot.default,
            strike: ranges.strike.default,
            volatility_pct: ranges.volatility_pct.default,
            maturity_days: ranges.maturity_days.default,
            rate_pct: ranges.rate_pct.default,
            option_type: config.option_type,
        }
    }

    /// Pull every value back inside its slider range
    pub fn clamped(self, ranges: &ControlRanges) -> Self {
        Self {
            spot: ranges.spot.clamp(self.spot),
            strike: ranges.strike.clamp(self.strike),
            volatility_pct: ranges.volatility_pct.clamp(self.volatility_pct),
            maturity_days: ranges.maturity_days.clamp(self.maturity_days),
            rate_pct: ranges.rate_pct.clamp(self.rate_pct),
            option_type: self.option_type,
        }
    }

    /// Convert to formula units: vol and rate as fractions, maturity in years
    pub fn market_inputs(&self) -> MarketInputs {
        MarketInputs::new(
            self.spot,
            self.strike,
            year_fraction(self.maturity_days),
            self.rate_pct / 100.0,
            self.volatility_pct / 100.0,
        )
    }
}
