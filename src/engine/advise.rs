use crate::engine::score::composite_score;
use crate::error::ScoreResult;
use crate::model::entity::{Asset, Worker};
use crate::model::flags::{Advisory, AssetAction, Flag, WorkerAction, flag_order};
use crate::model::policy::ScoringPolicy;
use crate::model::snapshot::Snapshot;

pub fn recommend_worker(worker: &Worker, policy: &ScoringPolicy) -> ScoreResult<WorkerAction> {
    if is_fatigued(worker, policy) {
        return Ok(WorkerAction::Rest);
    }
    if composite_score(worker)? < policy.at_risk_below {
        return Ok(WorkerAction::Train);
    }
    Ok(WorkerAction::Optimal)
}

pub fn recommend_asset(asset: &Asset, policy: &ScoringPolicy) -> ScoreResult<AssetAction> {
    if composite_score(asset)? < policy.asset_floor {
        Ok(AssetAction::Fix)
    } else {
        Ok(AssetAction::Ok)
    }
}

pub fn worker_flags(worker: &Worker, policy: &ScoringPolicy) -> ScoreResult<Vec<Flag>> {
    let composite = composite_score(worker)?;
    let mut flags = Vec::new();

    if composite >= policy.high_performer_at {
        flags.push(Flag::HighPerformer);
    }
    if composite < policy.at_risk_below {
        flags.push(Flag::BelowThreshold);
    }
    if is_fatigued(worker, policy) {
        flags.push(Flag::HighFatigue);
    }

    // stable ordering
    let mut ordered = Vec::new();
    for flag in flag_order() {
        if flags.contains(flag) {
            ordered.push(*flag);
        }
    }
    Ok(ordered)
}

/// Fatigued workers plus assets under the floor.
pub fn count_alerts(snapshot: &Snapshot, policy: &ScoringPolicy) -> ScoreResult<usize> {
    let mut alerts = snapshot
        .workers
        .iter()
        .filter(|w| is_fatigued(w, policy))
        .count();
    for asset in &snapshot.assets {
        if recommend_asset(asset, policy)? == AssetAction::Fix {
            alerts += 1;
        }
    }
    Ok(alerts)
}

pub fn advisory(alerts: usize) -> Advisory {
    if alerts > 0 {
        Advisory::RiskAlert
    } else {
        Advisory::Optimize
    }
}

fn is_fatigued(worker: &Worker, policy: &ScoringPolicy) -> bool {
    worker.fatigue.is_some_and(|f| f > policy.fatigue_limit)
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/advise.rs"]
mod tests;
