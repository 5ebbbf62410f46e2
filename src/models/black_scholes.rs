//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks: delta, gamma, vega, theta, rho
//! - Elementwise evaluation over broadcast arrays
//!
//! The free functions evaluate the closed forms directly and never validate:
//! degenerate inputs (`T = 0`, `sigma = 0`, non-positive spot or strike)
//! propagate as `NaN`/`Inf`. [`BlackScholes`] wraps the same formulas with a
//! [`ValidationPolicy`] that is applied identically to every operation.
//!
//! Conventions: vega and rho are per 1% move (divided by 100), theta is per
//! calendar day (divided by 365).

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use super::broadcast::MarketArrays;
use super::normal::{NormalDistribution, StandardNormal};
use crate::core::{BsResult, Greeks, MarketInputs, OptionType, PricingResult, DAYS_PER_YEAR};

/// Scale for vega and rho (per 1 percentage point)
const PERCENT: f64 = 100.0;

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price
pub fn price(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, option_type: OptionType) -> f64 {
    price_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol), option_type)
}

/// Delta: Φ(d1) for calls, Φ(d1) − 1 for puts
pub fn delta(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, option_type: OptionType) -> f64 {
    delta_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol), option_type)
}

/// Gamma (same for call and put)
pub fn gamma(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    gamma_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol))
}

/// Vega per 1% vol move (same for call and put)
pub fn vega(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    vega_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol))
}

/// Theta per calendar day
pub fn theta(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, option_type: OptionType) -> f64 {
    theta_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol), option_type)
}

/// Rho per 1% rate move
pub fn rho(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, option_type: OptionType) -> f64 {
    rho_with(&StandardNormal, &MarketInputs::new(spot, strike, time, rate, vol), option_type)
}

fn d1_of(m: &MarketInputs) -> f64 {
    d1(m.spot, m.strike, m.time, m.rate, m.vol)
}

fn d2_of(m: &MarketInputs) -> f64 {
    d1_of(m) - m.total_vol()
}

fn price_with<N: NormalDistribution>(n: &N, m: &MarketInputs, option_type: OptionType) -> f64 {
    let d1 = d1_of(m);
    let d2 = d2_of(m);
    let df = m.discount_factor();

    match option_type {
        OptionType::Call => m.spot * n.cdf(d1) - m.strike * df * n.cdf(d2),
        OptionType::Put => m.strike * df * n.cdf(-d2) - m.spot * n.cdf(-d1),
    }
}

fn delta_with<N: NormalDistribution>(n: &N, m: &MarketInputs, option_type: OptionType) -> f64 {
    let cdf_d1 = n.cdf(d1_of(m));
    match option_type {
        OptionType::Call => cdf_d1,
        OptionType::Put => cdf_d1 - 1.0,
    }
}

fn gamma_with<N: NormalDistribution>(n: &N, m: &MarketInputs) -> f64 {
    n.pdf(d1_of(m)) / (m.spot * m.total_vol())
}

fn vega_with<N: NormalDistribution>(n: &N, m: &MarketInputs) -> f64 {
    m.spot * n.pdf(d1_of(m)) * m.time.sqrt() / PERCENT
}

fn theta_with<N: NormalDistribution>(n: &N, m: &MarketInputs, option_type: OptionType) -> f64 {
    let d1 = d1_of(m);
    let d2 = d2_of(m);
    let df = m.discount_factor();

    // Time decay of the optionality, common to both sides
    let decay = -m.spot * n.pdf(d1) * m.vol / (2.0 * m.time.sqrt());
    let theta = match option_type {
        OptionType::Call => decay - m.rate * m.strike * df * n.cdf(d2),
        OptionType::Put => decay + m.rate * m.strike * df * n.cdf(-d2),
    };
    theta / DAYS_PER_YEAR
}

fn rho_with<N: NormalDistribution>(n: &N, m: &MarketInputs, option_type: OptionType) -> f64 {
    let d2 = d2_of(m);
    let k_t_df = m.strike * m.time * m.discount_factor();
    match option_type {
        OptionType::Call => k_t_df * n.cdf(d2) / PERCENT,
        OptionType::Put => -k_t_df * n.cdf(-d2) / PERCENT,
    }
}

/// How engine operations treat inputs outside the formulas' domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject `S<=0`, `K<=0`, `T<=0`, `sigma<=0` or non-finite inputs
    /// with `BsError::InvalidDomainInput` before computing
    #[default]
    Strict,
    /// Evaluate anyway; IEEE-754 `NaN`/`Inf` flow through to the outputs
    Permissive,
}

impl ValidationPolicy {
    /// Apply the policy to one set of inputs
    pub fn check(&self, inputs: &MarketInputs) -> BsResult<()> {
        match self {
            ValidationPolicy::Permissive => Ok(()),
            ValidationPolicy::Strict => inputs.validate().map_err(|e| {
                tracing::debug!(?inputs, "rejected: {e}");
                e
            }),
        }
    }
}

/// A quantity the engine can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Measure {
    pub const ALL: [Measure; 6] = [
        Measure::Price,
        Measure::Delta,
        Measure::Gamma,
        Measure::Vega,
        Measure::Theta,
        Measure::Rho,
    ];

    /// True when the call and put values coincide
    pub fn is_type_independent(&self) -> bool {
        matches!(self, Measure::Gamma | Measure::Vega)
    }
}

/// Black-Scholes pricing engine
///
/// Stateless and `Copy`; every method is a pure function of its arguments.
/// The [`ValidationPolicy`] is checked at the start of every operation,
/// including `d1`/`d2`, so all outputs share one error behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes<N = StandardNormal> {
    normal: N,
    policy: ValidationPolicy,
}

impl BlackScholes {
    /// Strict engine on the erfc-based normal
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that never validates, matching the free functions
    pub fn permissive() -> Self {
        Self::default().with_policy(ValidationPolicy::Permissive)
    }
}

impl<N: NormalDistribution> BlackScholes<N> {
    pub fn with_normal(normal: N) -> Self {
        Self {
            normal,
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn normal(&self) -> &N {
        &self.normal
    }

    pub fn d1(&self, inputs: &MarketInputs) -> BsResult<f64> {
        self.policy.check(inputs)?;
        Ok(d1_of(inputs))
    }

    pub fn d2(&self, inputs: &MarketInputs) -> BsResult<f64> {
        self.policy.check(inputs)?;
        Ok(d2_of(inputs))
    }

    pub fn price(&self, inputs: &MarketInputs, option_type: OptionType) -> BsResult<f64> {
        self.measure(Measure::Price, inputs, option_type)
    }

    pub fn delta(&self, inputs: &MarketInputs, option_type: OptionType) -> BsResult<f64> {
        self.measure(Measure::Delta, inputs, option_type)
    }

    pub fn gamma(&self, inputs: &MarketInputs) -> BsResult<f64> {
        self.measure(Measure::Gamma, inputs, OptionType::Call)
    }

    pub fn vega(&self, inputs: &MarketInputs) -> BsResult<f64> {
        self.measure(Measure::Vega, inputs, OptionType::Call)
    }

    pub fn theta(&self, inputs: &MarketInputs, option_type: OptionType) -> BsResult<f64> {
        self.measure(Measure::Theta, inputs, option_type)
    }

    pub fn rho(&self, inputs: &MarketInputs, option_type: OptionType) -> BsResult<f64> {
        self.measure(Measure::Rho, inputs, option_type)
    }

    /// Compute one measure; `option_type` is ignored for gamma and vega
    pub fn measure(
        &self,
        measure: Measure,
        inputs: &MarketInputs,
        option_type: OptionType,
    ) -> BsResult<f64> {
        self.policy.check(inputs)?;
        Ok(self.measure_unchecked(measure, inputs, option_type))
    }

    fn measure_unchecked(&self, measure: Measure, m: &MarketInputs, option_type: OptionType) -> f64 {
        let n = &self.normal;
        match measure {
            Measure::Price => price_with(n, m, option_type),
            Measure::Delta => delta_with(n, m, option_type),
            Measure::Gamma => gamma_with(n, m),
            Measure::Vega => vega_with(n, m),
            Measure::Theta => theta_with(n, m, option_type),
            Measure::Rho => rho_with(n, m, option_type),
        }
    }

    /// Price and all five Greeks
    pub fn evaluate(&self, inputs: &MarketInputs, option_type: OptionType) -> BsResult<PricingResult> {
        self.policy.check(inputs)?;
        let value = |measure| self.measure_unchecked(measure, inputs, option_type);

        Ok(PricingResult {
            option_type,
            inputs: *inputs,
            price: value(Measure::Price),
            greeks: Greeks::new(
                value(Measure::Delta),
                value(Measure::Gamma),
                value(Measure::Vega),
                value(Measure::Theta),
                value(Measure::Rho),
            ),
        })
    }

    /// Elementwise evaluation over broadcast inputs.
    ///
    /// Under the strict policy the whole grid is validated first and the
    /// first invalid element aborts the call.
    pub fn evaluate_array(
        &self,
        arrays: &MarketArrays,
        measure: Measure,
        option_type: OptionType,
    ) -> BsResult<ArrayD<f64>> {
        let grid = arrays.inputs()?;
        for inputs in grid.iter() {
            self.policy.check(inputs)?;
        }
        Ok(grid.map(|m| self.measure_unchecked(measure, m, option_type)))
    }
}
