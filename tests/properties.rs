//! Property tests for the Black-Scholes closed forms

use bs_explainer::prelude::*;
use ndarray::{Array2, Ix2};
use proptest::prelude::*;

fn spot_strategy() -> impl Strategy<Value = f64> {
    10.0..500.0
}

fn time_strategy() -> impl Strategy<Value = f64> {
    0.01..3.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.02..0.10
}

fn vol_strategy() -> impl Strategy<Value = f64> {
    0.05..1.0
}

/// Strike / spot, kept clear of the money
fn moneyness_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.5..0.9, 1.2..2.0]
}

fn inputs_strategy() -> impl Strategy<Value = MarketInputs> {
    (
        spot_strategy(),
        spot_strategy(),
        time_strategy(),
        rate_strategy(),
        vol_strategy(),
    )
        .prop_map(|(s, k, t, r, v)| MarketInputs::new(s, k, t, r, v))
}

fn price_of(m: &MarketInputs, option_type: OptionType) -> f64 {
    bs_price(m.spot, m.strike, m.time, m.rate, m.vol, option_type)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity(m in inputs_strategy()) {
        let call = price_of(&m, OptionType::Call);
        let put = price_of(&m, OptionType::Put);
        let forward_gap = m.spot - m.strike * m.discount_factor();
        let tolerance = 1e-8 * m.spot.max(m.strike);

        prop_assert!(
            (call - put - forward_gap).abs() < tolerance,
            "C - P = {}, S - K*df = {}", call - put, forward_gap
        );
    }

    #[test]
    fn test_delta_call_minus_put_is_one(m in inputs_strategy()) {
        let call = bs_delta(m.spot, m.strike, m.time, m.rate, m.vol, OptionType::Call);
        let put = bs_delta(m.spot, m.strike, m.time, m.rate, m.vol, OptionType::Put);

        prop_assert!((call - put - 1.0).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&call));
        prop_assert!((-1.0..=0.0).contains(&put));
    }

    #[test]
    fn test_gamma_vega_type_independent(m in inputs_strategy()) {
        let engine = BlackScholes::new();
        for measure in [Measure::Gamma, Measure::Vega] {
            let call = engine.measure(measure, &m, OptionType::Call).unwrap();
            let put = engine.measure(measure, &m, OptionType::Put).unwrap();
            prop_assert_eq!(call, put);
            prop_assert!(call >= 0.0);
        }
    }

    #[test]
    fn test_price_bounds(m in inputs_strategy()) {
        let df = m.discount_factor();
        let tolerance = 1e-9 * m.spot.max(m.strike);
        let call = price_of(&m, OptionType::Call);
        let put = price_of(&m, OptionType::Put);

        prop_assert!(call >= (m.spot - m.strike * df).max(0.0) - tolerance);
        prop_assert!(call <= m.spot + tolerance);
        prop_assert!(put >= (m.strike * df - m.spot).max(0.0) - tolerance);
        prop_assert!(put <= m.strike * df + tolerance);
    }

    #[test]
    fn test_monotone_in_spot(m in inputs_strategy(), bump in 1.001..1.5f64) {
        let up = m.with_spot(m.spot * bump);
        let tolerance = 1e-9 * up.spot.max(m.strike);

        prop_assert!(price_of(&up, OptionType::Call) >= price_of(&m, OptionType::Call) - tolerance);
        prop_assert!(price_of(&up, OptionType::Put) <= price_of(&m, OptionType::Put) + tolerance);
    }

    #[test]
    fn test_monotone_in_vol(m in inputs_strategy(), bump in 0.001..0.5f64) {
        let up = m.with_vol(m.vol + bump);
        let tolerance = 1e-9 * m.spot.max(m.strike);

        for option_type in [OptionType::Call, OptionType::Put] {
            prop_assert!(price_of(&up, option_type) >= price_of(&m, option_type) - tolerance);
        }
    }

    #[test]
    fn test_expiry_limit_is_intrinsic(
        spot in spot_strategy(),
        moneyness in moneyness_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy(),
    ) {
        let m = MarketInputs::new(spot, spot * moneyness, 1e-10, rate, vol);
        for option_type in [OptionType::Call, OptionType::Put] {
            let intrinsic = option_type.intrinsic(m.spot, m.strike);
            prop_assert!((price_of(&m, option_type) - intrinsic).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_vol_limit_is_discounted_intrinsic(
        spot in spot_strategy(),
        moneyness in moneyness_strategy(),
        time in 0.1..1.0f64,
        rate in 0.0..0.05f64,
    ) {
        let m = MarketInputs::new(spot, spot * moneyness, time, rate, 1e-9);
        let discounted_strike = m.strike * m.discount_factor();
        let tolerance = 1e-8 * spot;

        let call = price_of(&m, OptionType::Call);
        let put = price_of(&m, OptionType::Put);
        prop_assert!((call - (m.spot - discounted_strike).max(0.0)).abs() < tolerance);
        prop_assert!((put - (discounted_strike - m.spot).max(0.0)).abs() < tolerance);
    }

    #[test]
    fn test_strict_engine_rejects_non_positive_vol(m in inputs_strategy(), vol in -1.0..=0.0f64) {
        let bad = m.with_vol(vol);
        let err = BlackScholes::new().price(&bad, OptionType::Call).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn test_abramowitz_stegun_close_to_exact(x in -8.0..8.0f64) {
        let approx = AbramowitzStegun.cdf(x);
        // A-S bound plus the erfc error of the reference
        prop_assert!((approx - norm_cdf(x)).abs() < 7.6e-8);
    }

    #[test]
    fn test_broadcast_matches_scalar(
        base in inputs_strategy(),
        spots in prop::collection::vec(spot_strategy(), 1..6),
        vols in prop::collection::vec(vol_strategy(), 1..6),
    ) {
        let n_spots = spots.len();
        let n_vols = vols.len();
        let arrays = MarketArrays::from_scalar(&base)
            .with_spot(Array2::from_shape_vec((1, n_spots), spots.clone()).unwrap())
            .with_vol(Array2::from_shape_vec((n_vols, 1), vols.clone()).unwrap());

        let prices = BlackScholes::new()
            .evaluate_array(&arrays, Measure::Price, OptionType::Put)
            .unwrap()
            .into_dimensionality::<Ix2>()
            .unwrap();

        prop_assert_eq!(prices.dim(), (n_vols, n_spots));
        for (vi, &vol) in vols.iter().enumerate() {
            for (si, &spot) in spots.iter().enumerate() {
                let expected = bs_price(spot, base.strike, base.time, base.rate, vol, OptionType::Put);
                prop_assert!((prices[[vi, si]] - expected).abs() < 1e-12);
            }
        }
    }
}
