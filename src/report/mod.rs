pub mod json;
pub mod text;

use std::path::Path;

use serde::Serialize;

use crate::engine::advise::{
    advisory, count_alerts, recommend_asset, recommend_worker, worker_flags,
};
use crate::engine::{composite_score, find_at_risk, linear_forecast, score_entity, top_n};
use crate::error::{ScoreResult, SnapshotError};
use crate::model::entity::Worker;
use crate::model::flags::{Advisory, AssetAction, Flag, WorkerAction};
use crate::model::policy::ScoringPolicy;
use crate::model::risk::RiskClass;
use crate::model::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkerRow {
    pub name: String,
    pub role: String,
    pub composite_score: f64,
    pub forecast_score: f64,
    pub risk: RiskClass,
    pub fatigue: Option<f64>,
    pub action: WorkerAction,
    pub flags: Vec<Flag>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetRow {
    pub name: String,
    pub kind: String,
    pub condition: f64,
    pub action: AssetAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedName {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeStats {
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub tool: String,
    pub version: String,
    pub current_load: Option<f64>,
    pub load_forecast: Option<f64>,
    pub load_prediction: Vec<f64>,
    pub savings: f64,
    pub alerts: usize,
    pub advisory: Advisory,
    pub advisory_message: String,
    pub at_risk_threshold: f64,
    pub workers: Vec<WorkerRow>,
    pub assets: Vec<AssetRow>,
    pub top_performers: Vec<RankedName>,
    pub at_risk: Vec<RankedName>,
    pub composite_stats: CompositeStats,
}

pub fn build_summary(
    snapshot: &Snapshot,
    policy: &ScoringPolicy,
) -> ScoreResult<DashboardSummary> {
    let mut workers = Vec::with_capacity(snapshot.workers.len());
    let mut composites = Vec::with_capacity(snapshot.workers.len());
    for worker in &snapshot.workers {
        let scored = score_entity(worker, policy)?;
        composites.push(scored.composite_score);
        workers.push(WorkerRow {
            name: worker.name.clone(),
            role: worker.role.clone(),
            composite_score: scored.composite_score,
            forecast_score: scored.forecast_score,
            risk: scored.risk,
            fatigue: worker.fatigue,
            action: recommend_worker(worker, policy)?,
            flags: worker_flags(worker, policy)?,
        });
    }

    let mut assets = Vec::with_capacity(snapshot.assets.len());
    for asset in &snapshot.assets {
        assets.push(AssetRow {
            name: asset.name.clone(),
            kind: asset.kind.clone(),
            condition: composite_score(asset)?,
            action: recommend_asset(asset, policy)?,
        });
    }

    let ranked = top_n(&workers, |w| w.composite_score, policy.top_n)?;
    if ranked.len() < policy.top_n {
        tracing::warn!(
            "requested top {} performers but only {} workers are available",
            policy.top_n,
            ranked.len()
        );
    }
    let top_performers = ranked
        .into_iter()
        .map(|w| RankedName {
            name: w.name,
            score: w.composite_score,
        })
        .collect();

    let at_risk = find_at_risk(
        &snapshot.workers,
        composite_score::<Worker>,
        policy.at_risk_below,
    )?
    .into_iter()
    .map(|(w, score)| RankedName {
        name: w.name.clone(),
        score,
    })
    .collect();

    let load_forecast = if snapshot.load_history.is_empty() {
        None
    } else {
        Some(linear_forecast(
            &snapshot.load_history,
            policy.series_growth_rate,
        )?)
    };

    let alerts = count_alerts(snapshot, policy)?;
    let advice = advisory(alerts);

    Ok(DashboardSummary {
        tool: "opsboard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        current_load: snapshot.current_load(),
        load_forecast,
        load_prediction: snapshot.load_prediction.clone(),
        savings: snapshot.savings,
        alerts,
        advisory: advice,
        advisory_message: advice.message().to_string(),
        at_risk_threshold: policy.at_risk_below,
        workers,
        assets,
        top_performers,
        at_risk,
        composite_stats: CompositeStats {
            median: median(&composites),
            p10: p10(&composites),
            p90: p90(&composites),
        },
    })
}

pub fn render(
    summary: &DashboardSummary,
    format: ReportFormat,
) -> Result<String, SnapshotError> {
    match format {
        ReportFormat::Text => Ok(text::render_summary_text(summary)),
        ReportFormat::Json => json::render_summary_json(summary).map_err(SnapshotError::Render),
    }
}

pub fn write_report(
    summary: &DashboardSummary,
    format: ReportFormat,
    out: &Path,
) -> Result<(), SnapshotError> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SnapshotError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let body = render(summary, format)?;
    std::fs::write(out, body).map_err(|source| SnapshotError::Io {
        path: out.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote report {}", out.display());
    Ok(())
}

pub fn format_score(v: f64) -> String {
    format!("{:.0}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
