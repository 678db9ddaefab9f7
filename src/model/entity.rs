use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::model::risk::RiskClass;

pub const METRIC_MIN: f64 = 0.0;
pub const METRIC_MAX: f64 = 100.0;

/// Anything carrying a named set of 0..=100 metrics.
pub trait Entity {
    fn name(&self) -> &str;
    fn metrics(&self) -> &BTreeMap<String, f64>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWorker")]
pub struct Worker {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    /// Condition signal, kept out of the composite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAsset")]
pub struct Asset {
    pub name: String,
    pub kind: String,
    pub metrics: BTreeMap<String, f64>,
}

/// Wire shape of a worker. Numeric top-level fields (`"score": 60`) are
/// folded into `metrics`; anything non-numeric fails the parse.
#[derive(Deserialize)]
struct RawWorker {
    name: String,
    role: String,
    #[serde(default)]
    metrics: BTreeMap<String, f64>,
    #[serde(default)]
    fatigue: Option<f64>,
    #[serde(flatten)]
    inline_metrics: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct RawAsset {
    name: String,
    #[serde(alias = "type")]
    kind: String,
    #[serde(default)]
    metrics: BTreeMap<String, f64>,
    #[serde(flatten)]
    inline_metrics: BTreeMap<String, f64>,
}

impl From<RawWorker> for Worker {
    fn from(raw: RawWorker) -> Self {
        let mut metrics = raw.metrics;
        metrics.extend(raw.inline_metrics);
        Self {
            name: raw.name,
            role: raw.role,
            metrics,
            fatigue: raw.fatigue,
        }
    }
}

impl From<RawAsset> for Asset {
    fn from(raw: RawAsset) -> Self {
        let mut metrics = raw.metrics;
        metrics.extend(raw.inline_metrics);
        Self {
            name: raw.name,
            kind: raw.kind,
            metrics,
        }
    }
}

impl Worker {
    pub fn new(name: &str, role: &str, metrics: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            metrics: collect_metrics(metrics),
            fatigue: None,
        }
    }

    pub fn with_fatigue(mut self, fatigue: f64) -> Self {
        self.fatigue = Some(fatigue);
        self
    }

    pub fn validate(&self) -> ScoreResult<()> {
        validate_metrics(&self.name, &self.metrics)?;
        if let Some(fatigue) = self.fatigue {
            check_range(&format!("{}.fatigue", self.name), fatigue)?;
        }
        Ok(())
    }
}

impl Asset {
    pub fn new(name: &str, kind: &str, metrics: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            metrics: collect_metrics(metrics),
        }
    }

    pub fn validate(&self) -> ScoreResult<()> {
        validate_metrics(&self.name, &self.metrics)
    }
}

impl Entity for Worker {
    fn name(&self) -> &str {
        &self.name
    }

    fn metrics(&self) -> &BTreeMap<String, f64> {
        &self.metrics
    }
}

impl Entity for Asset {
    fn name(&self) -> &str {
        &self.name
    }

    fn metrics(&self) -> &BTreeMap<String, f64> {
        &self.metrics
    }
}

fn collect_metrics(metrics: &[(&str, f64)]) -> BTreeMap<String, f64> {
    metrics
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn validate_metrics(owner: &str, metrics: &BTreeMap<String, f64>) -> ScoreResult<()> {
    if metrics.is_empty() {
        return Err(ScoreError::invalid(format!("'{owner}' has no metrics")));
    }
    for (name, &value) in metrics {
        check_range(&format!("{owner}.{name}"), value)?;
    }
    Ok(())
}

pub fn check_range(field: &str, value: f64) -> ScoreResult<()> {
    if value.is_finite() && (METRIC_MIN..=METRIC_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ScoreError::Range {
            field: field.to_string(),
            value,
        })
    }
}

/// Entity paired with its derived scores. Recomputed per query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntity<T> {
    pub entity: T,
    pub composite_score: f64,
    pub forecast_score: f64,
    pub risk: RiskClass,
}
