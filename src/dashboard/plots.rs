//! Plot data for the dashboard
//!
//! - Price surface over spot × volatility at fixed strike, rate and maturity
//! - Delta as a function of spot with everything else fixed
//!
//! Both are evaluated through [`MarketArrays`] so the grid values are exactly
//! the scalar formulas applied per point.

use ndarray::{Array1, Array2, Axis, Ix2};
use serde::{Deserialize, Serialize};

use super::config::GridConfig;
use crate::core::{BsError, BsResult, MarketInputs, OptionType};
use crate::models::{BlackScholes, MarketArrays, Measure, NormalDistribution};

/// Option prices on a spot × volatility grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSurface {
    pub option_type: OptionType,
    /// Column axis
    pub spots: Vec<f64>,
    /// Row axis, as fractions
    pub vols: Vec<f64>,
    /// prices[[vol_index, spot_index]]
    pub prices: Array2<f64>,
}

impl PriceSurface {
    /// Evaluate `base` over the grid, replacing its spot and vol
    pub fn compute<N: NormalDistribution>(
        engine: &BlackScholes<N>,
        base: &MarketInputs,
        grid: &GridConfig,
        option_type: OptionType,
    ) -> BsResult<Self> {
        Self::from_axes(engine, base, grid.spot_axis(), grid.vol_axis(), option_type)
    }

    pub fn from_axes<N: NormalDistribution>(
        engine: &BlackScholes<N>,
        base: &MarketInputs,
        spots: Array1<f64>,
        vols: Array1<f64>,
        option_type: OptionType,
    ) -> BsResult<Self> {
        let arrays = MarketArrays::from_scalar(base)
            .with_spot(spots.clone().insert_axis(Axis(0)))
            .with_vol(vols.clone().insert_axis(Axis(1)));

        let prices = engine
            .evaluate_array(&arrays, Measure::Price, option_type)?
            .into_dimensionality::<Ix2>()
            .map_err(|e| BsError::shape_mismatch(e.to_string()))?;

        tracing::debug!(
            rows = vols.len(),
            cols = spots.len(),
            %option_type,
            "computed price surface"
        );

        Ok(Self {
            option_type,
            spots: spots.to_vec(),
            vols: vols.to_vec(),
            prices,
        })
    }

    /// Volatility axis in percent, for display
    pub fn vols_pct(&self) -> Vec<f64> {
        self.vols.iter().map(|v| v * 100.0).collect()
    }

    /// Price curve across spot at one volatility row
    pub fn slice(&self, vol_index: usize) -> Option<Vec<[f64; 2]>> {
        if vol_index >= self.vols.len() {
            return None;
        }
        let row = self.prices.row(vol_index);
        Some(self.spots.iter().zip(row.iter()).map(|(&s, &p)| [s, p]).collect())
    }

    /// (min, max) over finite prices
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.prices
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}

/// Delta across spot at fixed strike, rate, maturity and volatility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaCurve {
    pub option_type: OptionType,
    pub spots: Vec<f64>,
    pub deltas: Vec<f64>,
}

impl DeltaCurve {
    pub fn compute<N: NormalDistribution>(
        engine: &BlackScholes<N>,
        base: &MarketInputs,
        spots: Array1<f64>,
        option_type: OptionType,
    ) -> BsResult<Self> {
        let arrays = MarketArrays::from_scalar(base).with_spot(spots.clone());
        let deltas = engine.evaluate_array(&arrays, Measure::Delta, option_type)?;

        Ok(Self {
            option_type,
            spots: spots.to_vec(),
            deltas: deltas.iter().copied().collect(),
        })
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.spots
            .iter()
            .zip(&self.deltas)
            .map(|(&s, &d)| [s, d])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::black_scholes::{delta, price};

    fn base() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 30.0 / 365.0, 0.02, 0.2)
    }

    #[test]
    fn test_surface_orientation() {
        let engine = BlackScholes::new();
        let grid = GridConfig::default();
        let surface = PriceSurface::compute(&engine, &base(), &grid, OptionType::Call).unwrap();

        assert_eq!(surface.prices.dim(), (40, 40));
        assert_eq!(surface.spots.len(), 40);
        assert_eq!(surface.vols.len(), 40);

        for (vi, &v) in surface.vols.iter().enumerate().step_by(7) {
            for (si, &s) in surface.spots.iter().enumerate().step_by(5) {
                let expected = price(s, 100.0, 30.0 / 365.0, 0.02, v, OptionType::Call);
                assert_eq!(surface.prices[[vi, si]], expected);
            }
        }
    }

    #[test]
    fn test_surface_monotone_in_vol() {
        let surface =
            PriceSurface::compute(&BlackScholes::new(), &base(), &GridConfig::default(), OptionType::Put)
                .unwrap();
        for si in 0..surface.spots.len() {
            let column = surface.prices.column(si);
            for pair in column.to_vec().windows(2) {
                assert!(pair[1] >= pair[0] - 1e-12);
            }
        }
    }

    #[test]
    fn test_surface_helpers() {
        let surface = PriceSurface::from_axes(
            &BlackScholes::new(),
            &base(),
            Array1::linspace(50.0, 150.0, 5),
            Array1::linspace(0.1, 0.5, 3),
            OptionType::Call,
        )
        .unwrap();

        assert_eq!(surface.prices.dim(), (3, 5));
        let pct = surface.vols_pct();
        assert!((pct[0] - 10.0).abs() < 1e-12);
        assert!((pct[2] - 50.0).abs() < 1e-12);

        let slice = surface.slice(1).unwrap();
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[4][0], 150.0);
        assert_eq!(slice[4][1], surface.prices[[1, 4]]);
        assert!(surface.slice(3).is_none());

        let (lo, hi) = surface.price_range().unwrap();
        assert!(lo.abs() < 1e-6);
        assert!(hi > 50.0);
    }

    #[test]
    fn test_delta_curve() {
        let spots = GridConfig::default().spot_axis();
        let curve =
            DeltaCurve::compute(&BlackScholes::new(), &base(), spots.clone(), OptionType::Call).unwrap();

        assert_eq!(curve.deltas.len(), spots.len());
        for (&s, &d) in curve.spots.iter().zip(&curve.deltas) {
            assert_eq!(d, delta(s, 100.0, 30.0 / 365.0, 0.02, 0.2, OptionType::Call));
            assert!((0.0..=1.0).contains(&d));
        }
        for pair in curve.deltas.windows(2) {
            assert!(pair[1] >= pair[0]);
        }

        let points = curve.points();
        assert_eq!(points[0], [curve.spots[0], curve.deltas[0]]);
    }

    #[test]
    fn test_strict_surface_rejects_invalid_base() {
        let expired = MarketInputs { time: 0.0, ..base() };
        let err = PriceSurface::compute(
            &BlackScholes::new(),
            &expired,
            &GridConfig::default(),
            OptionType::Call,
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
