//! Option and market input definitions
//!
//! Represents the European option inputs consumed by the Black-Scholes formulas.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BsError, BsResult};

/// Calendar days per year used for maturities and theta
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Market inputs for a single Black-Scholes evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time: f64,
    /// Annualized risk-free rate (r), may be zero or negative
    pub rate: f64,
    /// Annualized volatility (sigma)
    pub vol: f64,
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
        }
    }

    /// Same inputs at a different spot
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Same inputs at a different volatility
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }

    /// sigma * sqrt(T)
    pub fn total_vol(&self) -> f64 {
        self.vol * self.time.sqrt()
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }

    /// Check the domain of the closed-form formulas.
    ///
    /// Spot, strike, time and vol must be finite and strictly positive; the
    /// rate only has to be finite. Reports the first offending parameter in
    /// `(spot, strike, time, rate, vol)` order.
    pub fn validate(&self) -> BsResult<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time", self.time),
        ];
        for (parameter, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(BsError::invalid_input(parameter, value));
            }
        }
        if !self.rate.is_finite() {
            return Err(BsError::invalid_input("rate", self.rate));
        }
        if !(self.vol.is_finite() && self.vol > 0.0) {
            return Err(BsError::invalid_input("vol", self.vol));
        }
        Ok(())
    }

    /// Is this option in the money?
    pub fn is_itm(&self, option_type: OptionType) -> bool {
        match option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}

/// Calendar days to a year fraction
pub fn year_fraction(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Year fraction between two dates (negative if `to` precedes `from`)
pub fn year_fraction_between(from: NaiveDate, to: NaiveDate) -> f64 {
    year_fraction((to - from).num_days() as f64)
}
