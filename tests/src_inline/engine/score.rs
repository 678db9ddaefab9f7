use super::*;
use crate::error::ScoreError;
use crate::model::entity::{Asset, Worker};

fn worker(metrics: &[(&str, f64)]) -> Worker {
    Worker::new("w", "Engineer", metrics)
}

#[test]
fn test_composite_rounds_mean() {
    let w = worker(&[
        ("completion_rate", 92.0),
        ("on_time_rate", 88.0),
        ("budget_rate", 95.0),
    ]);
    assert_eq!(composite_score(&w).unwrap(), 92.0);
}

#[test]
fn test_composite_within_bounds_and_matches_mean() {
    let grids: [&[f64]; 5] = [
        &[0.0],
        &[100.0, 100.0],
        &[0.0, 100.0, 50.0],
        &[33.0, 34.0],
        &[12.5, 99.9, 0.1, 47.0],
    ];
    for values in grids {
        let names = ["a", "b", "c", "d"];
        let metrics = names
            .iter()
            .zip(values.iter())
            .map(|(n, v)| (*n, *v))
            .collect::<Vec<_>>();
        let score = composite_score(&worker(&metrics)).unwrap();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(score, mean.round());
        assert!((0.0..=100.0).contains(&score));
    }
}

#[test]
fn test_composite_empty_metrics_invalid() {
    let err = composite_score(&worker(&[])).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)));
}

#[test]
fn test_composite_out_of_range_rejected() {
    let err = composite_score(&worker(&[("score", 101.0)])).unwrap_err();
    assert!(matches!(err, ScoreError::Range { value, .. } if value == 101.0));

    let err = composite_score(&worker(&[("score", f64::NAN)])).unwrap_err();
    assert!(matches!(err, ScoreError::Range { .. }));
}

#[test]
fn test_composite_single_asset_metric() {
    let a = Asset::new("Assembly Line 1", "Factory", &[("health", 45.0)]);
    assert_eq!(composite_score(&a).unwrap(), 45.0);
}

#[test]
fn test_forecast_growth_and_decay() {
    assert_eq!(forecast(92.0), 97.0);
    assert_eq!(forecast(81.0), 85.0);
    // pivot itself decays
    assert_eq!(forecast(80.0), 78.0);
    assert_eq!(forecast(50.0), 49.0);
    assert_eq!(forecast(0.0), 0.0);
}

#[test]
fn test_forecast_clamped_at_ceiling_only() {
    assert_eq!(forecast(96.0), 100.0);
    assert_eq!(forecast(100.0), 100.0);
    assert_eq!(forecast(-10.0), -10.0);
}

#[test]
fn test_forecast_monotone_above_pivot() {
    let mut prev = forecast(80.5);
    let mut s = 81.0;
    while s <= 100.0 {
        let f = forecast(s);
        assert!(f >= prev, "forecast({s})={f} < {prev}");
        assert!(f <= 100.0);
        prev = f;
        s += 0.5;
    }
}

#[test]
fn test_forecast_with_custom_policy() {
    let mut policy = ScoringPolicy::default_v1();
    policy.growth_multiplier = 1.5;
    policy.forecast_ceiling = 90.0;
    assert_eq!(forecast_with(85.0, &policy), 90.0);
}

#[test]
fn test_classify_risk_cutoffs() {
    let policy = ScoringPolicy::default_v1();
    assert_eq!(classify_risk(69.0, &policy), RiskClass::AtRisk);
    assert_eq!(classify_risk(70.0, &policy), RiskClass::Stable);
    assert_eq!(classify_risk(89.0, &policy), RiskClass::Stable);
    assert_eq!(classify_risk(90.0, &policy), RiskClass::HighPerformer);
    assert_eq!(classify_risk(97.0, &policy), RiskClass::HighPerformer);
}

#[test]
fn test_classify_risk_custom_threshold() {
    let policy = ScoringPolicy::with_threshold(50.0);
    assert_eq!(classify_risk(60.0, &policy), RiskClass::Stable);
    assert_eq!(classify_risk(49.0, &policy), RiskClass::AtRisk);
}

#[test]
fn test_linear_forecast_series() {
    let series = [12000.0, 15000.0, 11000.0, 20000.0, 23000.0, 25000.0];
    assert_eq!(linear_forecast(&series, 0.10).unwrap(), 27500.0);
    assert_eq!(linear_forecast(&[60.0], 0.0).unwrap(), 60.0);
}

#[test]
fn test_linear_forecast_empty_invalid() {
    let err = linear_forecast(&[], 0.10).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)));
}

#[test]
fn test_score_entity_bundles_derived_values() {
    let w = worker(&[("a", 92.0), ("b", 88.0), ("c", 95.0)]);
    let scored = score_entity(&w, &ScoringPolicy::default_v1()).unwrap();
    assert_eq!(scored.composite_score, 92.0);
    assert_eq!(scored.forecast_score, 97.0);
    assert_eq!(scored.risk, RiskClass::HighPerformer);
    assert_eq!(scored.entity, w);
}

#[test]
fn test_score_all_stops_on_first_error() {
    let ok = worker(&[("a", 50.0)]);
    let bad = worker(&[]);
    let policy = ScoringPolicy::default_v1();
    assert_eq!(score_all(&[ok.clone(), ok.clone()], &policy).unwrap().len(), 2);
    assert!(score_all(&[ok, bad], &policy).is_err());
}
