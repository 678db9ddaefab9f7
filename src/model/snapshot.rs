use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScoreResult, SnapshotError};
use crate::model::entity::{Asset, Worker, check_range};
use crate::model::policy::ScoringPolicy;

/// Point-in-time state of the dashboard. The driver owns the mutable copy;
/// scoring works against a borrowed one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "employees")]
    pub workers: Vec<Worker>,
    #[serde(default, alias = "machines")]
    pub assets: Vec<Asset>,
    #[serde(default, alias = "history")]
    pub load_history: Vec<f64>,
    #[serde(default, alias = "prediction")]
    pub load_prediction: Vec<f64>,
    #[serde(default)]
    pub savings: f64,
}

impl Snapshot {
    pub fn validate(&self) -> ScoreResult<()> {
        for worker in &self.workers {
            worker.validate()?;
        }
        for asset in &self.assets {
            asset.validate()?;
        }
        for (idx, &load) in self.load_history.iter().enumerate() {
            check_range(&format!("load_history[{idx}]"), load)?;
        }
        for (idx, &load) in self.load_prediction.iter().enumerate() {
            check_range(&format!("load_prediction[{idx}]"), load)?;
        }
        Ok(())
    }

    pub fn current_load(&self) -> Option<f64> {
        self.load_history.last().copied()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let snapshot: Snapshot = read_json(path)?;
    snapshot.validate()?;
    tracing::info!(
        "loaded snapshot {}: workers={}, assets={}, history={}",
        path.display(),
        snapshot.workers.len(),
        snapshot.assets.len(),
        snapshot.load_history.len()
    );
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let body = serde_json::to_string_pretty(snapshot).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, body).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("wrote snapshot {}", path.display());
    Ok(())
}

pub fn load_policy(path: &Path) -> Result<ScoringPolicy, SnapshotError> {
    let policy: ScoringPolicy = read_json(path)?;
    policy.validate()?;
    Ok(policy)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/snapshot.rs"]
mod tests;
