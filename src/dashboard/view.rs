//! Everything the dashboard displays for one set of controls

use serde::Serialize;

use super::config::DashboardConfig;
use super::controls::Controls;
use super::plots::{DeltaCurve, PriceSurface};
use crate::core::{BsResult, PricingResult};
use crate::models::BlackScholes;

/// A labelled Greek value, formatted for a tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreekTile {
    pub label: &'static str,
    pub value: f64,
    pub text: String,
}

/// Price, Greeks and plot data for the current controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub controls: Controls,
    pub result: PricingResult,
    pub surface: PriceSurface,
    pub delta_curve: DeltaCurve,
}

impl DashboardView {
    /// Recompute everything from scratch; nothing is cached between calls.
    ///
    /// The config is validated first, so a hand-built config with an empty
    /// slider range is reported as `BsError::Config`.
    pub fn compute(controls: &Controls, config: &DashboardConfig) -> BsResult<Self> {
        config.validate()?;
        let controls = controls.clamped(&config.controls);
        let engine = BlackScholes::new().with_policy(config.policy);
        let inputs = controls.market_inputs();
        let option_type = controls.option_type;

        let result = engine.evaluate(&inputs, option_type)?;
        let surface = PriceSurface::compute(&engine, &inputs, &config.surface, option_type)?;
        let delta_curve =
            DeltaCurve::compute(&engine, &inputs, config.surface.spot_axis(), option_type)?;

        Ok(Self {
            controls,
            result,
            surface,
            delta_curve,
        })
    }

    /// e.g. "Call Price: $2.37"
    pub fn headline(&self) -> String {
        format_headline(&self.result)
    }

    pub fn tiles(&self) -> Vec<GreekTile> {
        greek_tiles(&self.result)
    }

    pub fn surface_title(&self) -> String {
        format!("{} Price Surface", self.result.option_type)
    }

    /// "ITM", "ATM" or "OTM" at the current spot
    pub fn moneyness(&self) -> &'static str {
        let inputs = &self.result.inputs;
        if inputs.spot == inputs.strike {
            "ATM"
        } else if inputs.is_itm(self.result.option_type) {
            "ITM"
        } else {
            "OTM"
        }
    }
}

pub fn format_headline(result: &PricingResult) -> String {
    format!("{} Price: ${:.2}", result.option_type, result.price)
}

/// Delta, Gamma, Vega, Theta, Rho at four decimals
pub fn greek_tiles(result: &PricingResult) -> Vec<GreekTile> {
    result
        .greeks
        .named()
        .into_iter()
        .map(|(label, value)| GreekTile {
            label,
            value,
            text: format!("{value:.4}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BsError, OptionType};
    use crate::dashboard::SliderRange;
    use crate::models::ValidationPolicy;

    #[test]
    fn test_default_view() {
        let view = DashboardView::compute(&Controls::default(), &DashboardConfig::default()).unwrap();

        assert_eq!(view.headline(), "Call Price: $2.37");
        assert_eq!(view.surface_title(), "Call Price Surface");
        assert_eq!(view.moneyness(), "ATM");

        let tiles = view.tiles();
        let texts: Vec<_> = tiles.iter().map(|t| (t.label, t.text.as_str())).collect();
        assert_eq!(
            texts,
            [
                ("Delta", "0.5229"),
                ("Gamma", "0.0695"),
                ("Vega", "0.1142"),
                ("Theta", "-0.0408"),
                ("Rho", "0.0410"),
            ]
        );

        assert_eq!(view.surface.prices.dim(), (40, 40));
        assert_eq!(view.delta_curve.spots, view.surface.spots);
    }

    #[test]
    fn test_put_view() {
        let controls = Controls {
            spot: 120.0,
            option_type: OptionType::Put,
            ..Controls::default()
        };
        let view = DashboardView::compute(&controls, &DashboardConfig::default()).unwrap();

        assert!(view.headline().starts_with("Put Price: $"));
        assert_eq!(view.moneyness(), "OTM");
        assert!(view.result.greeks.delta < 0.0);
        assert!(view.delta_curve.deltas.iter().all(|d| (-1.0..=0.0).contains(d)));
    }

    #[test]
    fn test_out_of_range_controls_are_clamped() {
        let controls = Controls {
            maturity_days: 0.0,
            volatility_pct: -5.0,
            ..Controls::default()
        };
        let view = DashboardView::compute(&controls, &DashboardConfig::default()).unwrap();
        assert_eq!(view.controls.maturity_days, 1.0);
        assert_eq!(view.controls.volatility_pct, 1.0);
        assert!(view.result.is_finite());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut reversed = DashboardConfig::default();
        reversed.controls.spot = SliderRange::new(300.0, 10.0, 100.0, 1.0);
        let err = DashboardView::compute(&Controls::default(), &reversed).unwrap_err();
        assert!(matches!(err, BsError::Config(_)), "{err:?}");

        let mut nan_bound = DashboardConfig::default();
        nan_bound.controls.rate_pct.max = f64::NAN;
        let err = DashboardView::compute(&Controls::default(), &nan_bound).unwrap_err();
        assert!(matches!(err, BsError::Config(_)), "{err:?}");
    }

    #[test]
    fn test_permissive_config_is_used() {
        let config = DashboardConfig {
            policy: ValidationPolicy::Permissive,
            ..DashboardConfig::default()
        };
        let view = DashboardView::compute(&Controls::default(), &config).unwrap();
        assert!(view.result.is_finite());
    }
}
