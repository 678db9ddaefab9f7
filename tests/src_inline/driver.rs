use super::*;
use crate::model::entity::{Asset, Worker};

fn demo_snapshot() -> Snapshot {
    Snapshot {
        workers: vec![
            Worker::new("Sarah J.", "Engineer", &[("score", 95.0)]).with_fatigue(20.0),
            Worker::new("Mike R.", "Logistics", &[("score", 60.0)]).with_fatigue(85.0),
        ],
        assets: vec![
            Asset::new("Server Cluster A", "IT", &[("health", 98.0)]),
            Asset::new("Assembly Line 1", "Factory", &[("health", 45.0)]),
            Asset::new("Scrap Press", "Factory", &[("health", 0.5)]),
        ],
        load_history: vec![45.0, 50.0, 48.0, 55.0, 60.0],
        load_prediction: vec![60.0, 62.0, 65.0, 70.0, 68.0],
        savings: 450_000.0,
    }
}

#[test]
fn test_tick_rolls_window_and_degrades_assets() {
    let mut snap = demo_snapshot();
    tick(&mut snap, 70.0).unwrap();
    assert_eq!(snap.load_history, vec![50.0, 48.0, 55.0, 60.0, 70.0]);
    assert_eq!(snap.assets[0].metrics["health"], 97.0);
    assert_eq!(snap.assets[1].metrics["health"], 44.0);
    assert_eq!(snap.assets[2].metrics["health"], 0.0);
    assert_eq!(snap.load_prediction.len(), 5);
}

#[test]
fn test_tick_starts_window_when_empty() {
    let mut snap = Snapshot::default();
    tick(&mut snap, 55.0).unwrap();
    assert_eq!(snap.load_history, vec![55.0]);
    tick(&mut snap, 65.0).unwrap();
    assert_eq!(snap.load_history, vec![65.0]);
}

#[test]
fn test_tick_rejects_bad_sample() {
    let mut snap = demo_snapshot();
    let before = snap.clone();
    assert!(matches!(tick(&mut snap, 120.0), Err(ScoreError::Range { .. })));
    assert_eq!(snap, before);
}

#[test]
fn test_rest_resets_fatigue_and_raises_score() {
    let mut snap = demo_snapshot();
    rest_worker(&mut snap, 1).unwrap();
    assert_eq!(snap.workers[1].fatigue, Some(0.0));
    assert_eq!(snap.workers[1].metrics["score"], 70.0);
}

#[test]
fn test_train_caps_at_max() {
    let mut snap = demo_snapshot();
    train_worker(&mut snap, 1).unwrap();
    assert_eq!(snap.workers[1].metrics["score"], 75.0);
    train_worker(&mut snap, 0).unwrap();
    assert_eq!(snap.workers[0].metrics["score"], 100.0);
    assert!(snap.validate().is_ok());
}

#[test]
fn test_fix_restores_asset_and_adds_savings() {
    let mut snap = demo_snapshot();
    fix_asset(&mut snap, 1).unwrap();
    assert_eq!(snap.assets[1].metrics["health"], 100.0);
    assert_eq!(snap.savings, 455_000.0);
}

#[test]
fn test_apply_dispatches_and_checks_index() {
    let mut snap = demo_snapshot();
    apply(&mut snap, Action::Train, 1).unwrap();
    assert_eq!(snap.workers[1].metrics["score"], 75.0);
    assert!(matches!(
        apply(&mut snap, Action::Rest, 9),
        Err(ScoreError::InvalidInput(_))
    ));
    assert!(apply(&mut snap, Action::Fix, 3).is_err());
}
