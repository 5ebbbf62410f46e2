//! Standard normal distribution
//!
//! The Black-Scholes formulas only need the standard normal CDF (Φ) and PDF
//! (φ). Both are abstracted behind [`NormalDistribution`] so the engine can be
//! evaluated against alternative approximations.
//!
//! - [`StandardNormal`]: erfc-based, |error| below 1e-10 and no cancellation
//!   in the lower tail
//! - [`AbramowitzStegun`]: rational approximation 26.2.17, |error| < 7.5e-8

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal CDF and PDF
pub trait NormalDistribution {
    /// Cumulative distribution function Φ(x)
    fn cdf(&self, x: f64) -> f64;

    /// Probability density function φ(x)
    fn pdf(&self, x: f64) -> f64 {
        FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
    }
}

/// Standard normal backed by the complementary error function.
///
/// Φ(x) = ½·erfc(−x/√2). statrs' erfc is accurate to a few 1e-11 in absolute
/// terms. Using erfc instead of `1 + erf` avoids cancellation in the lower
/// tail, where Φ underflows towards zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardNormal;

impl NormalDistribution for StandardNormal {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * erfc(-x * FRAC_1_SQRT_2)
    }
}

/// Abramowitz & Stegun 26.2.17 polynomial approximation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbramowitzStegun;

impl AbramowitzStegun {
    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];
}

impl NormalDistribution for AbramowitzStegun {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let abs_x = x.abs();
        let t = 1.0 / (1.0 + Self::P * abs_x);
        let poly = Self::B.iter().rev().fold(0.0, |acc, b| (acc + b) * t);
        let upper = 1.0 - self.pdf(abs_x) * poly;
        if x >= 0.0 {
            upper
        } else {
            1.0 - upper
        }
    }
}

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    StandardNormal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
