//! State transitions over a caller-owned snapshot.
//!
//! The scoring core never mutates; everything that changes between
//! computation cycles goes through here.

use crate::error::{ScoreError, ScoreResult};
use crate::model::entity::{METRIC_MAX, METRIC_MIN, check_range};
use crate::model::snapshot::Snapshot;

pub const REST_BONUS: f64 = 10.0;
pub const TRAINING_BONUS: f64 = 15.0;
pub const FIX_SAVINGS: f64 = 5000.0;
pub const TICK_DEGRADATION: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rest,
    Train,
    Fix,
}

/// Rolls the load window forward and wears every asset metric down.
pub fn tick(snapshot: &mut Snapshot, load_sample: f64) -> ScoreResult<()> {
    check_range("load_sample", load_sample)?;
    snapshot.load_history.push(load_sample);
    if snapshot.load_history.len() > 1 {
        snapshot.load_history.remove(0);
    }
    for asset in &mut snapshot.assets {
        for value in asset.metrics.values_mut() {
            *value = (*value - TICK_DEGRADATION).max(METRIC_MIN);
        }
    }
    tracing::debug!(
        "tick: load={}, assets degraded={}",
        load_sample,
        snapshot.assets.len()
    );
    Ok(())
}

pub fn rest_worker(snapshot: &mut Snapshot, index: usize) -> ScoreResult<()> {
    let worker = snapshot
        .workers
        .get_mut(index)
        .ok_or_else(|| out_of_bounds("worker", index))?;
    worker.fatigue = Some(METRIC_MIN);
    raise_metrics(worker.metrics.values_mut(), REST_BONUS);
    tracing::info!("approved rest for {}", worker.name);
    Ok(())
}

pub fn train_worker(snapshot: &mut Snapshot, index: usize) -> ScoreResult<()> {
    let worker = snapshot
        .workers
        .get_mut(index)
        .ok_or_else(|| out_of_bounds("worker", index))?;
    raise_metrics(worker.metrics.values_mut(), TRAINING_BONUS);
    tracing::info!("sent {} to training", worker.name);
    Ok(())
}

pub fn fix_asset(snapshot: &mut Snapshot, index: usize) -> ScoreResult<()> {
    let asset = snapshot
        .assets
        .get_mut(index)
        .ok_or_else(|| out_of_bounds("asset", index))?;
    for value in asset.metrics.values_mut() {
        *value = METRIC_MAX;
    }
    snapshot.savings += FIX_SAVINGS;
    tracing::info!("dispatched maintenance to {}", asset.name);
    Ok(())
}

pub fn apply(snapshot: &mut Snapshot, action: Action, index: usize) -> ScoreResult<()> {
    match action {
        Action::Rest => rest_worker(snapshot, index),
        Action::Train => train_worker(snapshot, index),
        Action::Fix => fix_asset(snapshot, index),
    }
}

fn raise_metrics<'a>(values: impl Iterator<Item = &'a mut f64>, bonus: f64) {
    for value in values {
        *value = (*value + bonus).min(METRIC_MAX);
    }
}

fn out_of_bounds(kind: &str, index: usize) -> ScoreError {
    ScoreError::invalid(format!("no {kind} at index {index}"))
}

#[cfg(test)]
#[path = "../tests/src_inline/driver.rs"]
mod tests;
