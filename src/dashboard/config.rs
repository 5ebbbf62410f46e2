//! Configuration for the explainer dashboard

use std::path::Path;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::core::{BsError, BsResult, OptionType};
use crate::models::ValidationPolicy;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Option type selected on start
    pub option_type: OptionType,
    /// Input validation for every evaluation
    pub policy: ValidationPolicy,
    /// Slider ranges and starting values
    pub controls: ControlRanges,
    /// Spot × volatility grid for the price surface; its spot axis is
    /// shared by the delta curve
    pub surface: GridConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            policy: ValidationPolicy::Strict,
            controls: ControlRanges::default(),
            surface: GridConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Denser surface grid for large displays
    pub fn high_resolution() -> Self {
        Self {
            surface: GridConfig {
                points: 100,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document; missing keys take defaults
    pub fn from_toml_str(text: &str) -> BsResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> BsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> BsResult<String> {
        toml::to_string_pretty(self).map_err(|e| BsError::serialization(e.to_string()))
    }

    pub fn validate(&self) -> BsResult<()> {
        self.controls.validate()?;
        self.surface.validate()
    }
}

/// One slider: inclusive range, start value, increment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> BsResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min < self.max) {
            return Err(BsError::config(format!(
                "{name}: range [{}, {}] is empty",
                self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(BsError::config(format!(
                "{name}: default {} outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        if !(self.step > 0.0) {
            return Err(BsError::config(format!("{name}: step must be positive")));
        }
        Ok(())
    }
}

/// Slider ranges for the five market controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRanges {
    /// Stock price (S)
    pub spot: SliderRange,
    /// Strike price (K)
    pub strike: SliderRange,
    /// Volatility in percent
    pub volatility_pct: SliderRange,
    /// Time to maturity in calendar days
    pub maturity_days: SliderRange,
    /// Risk-free rate in percent
    pub rate_pct: SliderRange,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            spot: SliderRange::new(10.0, 300.0, 100.0, 1.0),
            strike: SliderRange::new(10.0, 300.0, 100.0, 1.0),
            volatility_pct: SliderRange::new(1.0, 100.0, 20.0, 1.0),
            maturity_days: SliderRange::new(1.0, 365.0, 30.0, 1.0),
            rate_pct: SliderRange::new(0.0, 15.0, 2.0, 1.0),
        }
    }
}

impl ControlRanges {
    fn validate(&self) -> BsResult<()> {
        self.spot.validate("spot")?;
        self.strike.validate("strike")?;
        self.volatility_pct.validate("volatility_pct")?;
        self.maturity_days.validate("maturity_days")?;
        self.rate_pct.validate("rate_pct")?;

        // The pricing domain needs strictly positive S, K, sigma and T
        let floors = [
            ("spot", self.spot.min),
            ("strike", self.strike.min),
            ("volatility_pct", self.volatility_pct.min),
            ("maturity_days", self.maturity_days.min),
        ];
        for (name, min) in floors {
            if min <= 0.0 {
                return Err(BsError::config(format!("{name}: minimum must be positive")));
            }
        }
        Ok(())
    }
}

/// Evenly spaced spot and volatility axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub spot_min: f64,
    pub spot_max: f64,
    /// Volatility bounds as fractions (0.01 = 1%)
    pub vol_min: f64,
    pub vol_max: f64,
    /// Points per axis
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spot_min: 10.0,
            spot_max: 300.0,
            vol_min: 0.01,
            vol_max: 1.0,
            points: 40,
        }
    }
}

impl GridConfig {
    pub fn spot_axis(&self) -> Array1<f64> {
        Array1::linspace(self.spot_min, self.spot_max, self.points)
    }

    pub fn vol_axis(&self) -> Array1<f64> {
        Array1::linspace(self.vol_min, self.vol_max, self.points)
    }

    fn validate(&self) -> BsResult<()> {
        if self.points < 2 {
            return Err(BsError::config("surface: need at least 2 points per axis"));
        }
        if !(self.spot_min > 0.0 && self.spot_min < self.spot_max) {
            return Err(BsError::config(format!(
                "surface: invalid spot axis [{}, {}]",
                self.spot_min, self.spot_max
            )));
        }
        if !(self.vol_min > 0.0 && self.vol_min < self.vol_max) {
            return Err(BsError::config(format!(
                "surface: invalid vol axis [{}, {}]",
                self.vol_min, self.vol_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert!(DashboardConfig::high_resolution().validate().is_ok());

        let spots = config.surface.spot_axis();
        assert_eq!(spots.len(), 40);
        assert_eq!(spots[0], 10.0);
        assert!((spots[39] - 300.0).abs() < 1e-9);

        let vols = config.surface.vol_axis();
        assert_eq!(vols[0], 0.01);
        assert!((vols[39] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_toml() {
        let config = DashboardConfig::from_toml_str(
            r#"
            option_type = "put"
            policy = "permissive"

            [surface]
            points = 25

            [controls.rate_pct]
            min = -2.0
            max = 10.0
            default = 0.0
            step = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.option_type, OptionType::Put);
        assert_eq!(config.policy, ValidationPolicy::Permissive);
        assert_eq!(config.surface.points, 25);
        assert_eq!(config.surface.spot_max, 300.0);
        assert_eq!(config.controls.rate_pct.min, -2.0);
        assert_eq!(config.controls.spot, ControlRanges::default().spot);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashboardConfig::high_resolution();
        let text = config.to_toml_string().unwrap();
        assert_eq!(DashboardConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            "[surface]\npoints = 1",
            "[surface]\nvol_min = 0.0",
            "[surface]\nspot_min = 400.0",
            "[controls.volatility_pct]\nmin = 0.0\nmax = 100.0\ndefault = 20.0\nstep = 1.0",
            "[controls.spot]\nmin = 10.0\nmax = 300.0\ndefault = 500.0\nstep = 1.0",
            "policy = \"lenient\"",
        ];
        for text in bad {
            let err = DashboardConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, BsError::Config(_)), "{text}: {err:?}");
        }
    }

    #[test]
    fn test_slider_clamp() {
        let range = ControlRanges::default().maturity_days;
        assert_eq!(range.clamp(0.0), 1.0);
        assert_eq!(range.clamp(400.0), 365.0);
        assert_eq!(range.clamp(30.0), 30.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DashboardConfig::load("/nonexistent/bs-explainer.toml").unwrap_err();
        assert!(matches!(err, BsError::Io(_)));
    }
}
