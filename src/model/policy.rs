use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// One named threshold model shared by every scoring call site.
///
/// Cutoffs:
/// - at risk: composite `< at_risk_below`
/// - high performer: composite `>= high_performer_at`
/// - stable: otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub at_risk_below: f64,
    pub high_performer_at: f64,
    pub forecast_pivot: f64,
    pub growth_multiplier: f64,
    pub decay_multiplier: f64,
    pub forecast_ceiling: f64,
    pub series_growth_rate: f64,
    pub fatigue_limit: f64,
    pub asset_floor: f64,
    pub top_n: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoringPolicy {
    pub fn default_v1() -> Self {
        Self {
            at_risk_below: 70.0,
            high_performer_at: 90.0,
            forecast_pivot: 80.0,
            growth_multiplier: 1.05,
            decay_multiplier: 0.98,
            forecast_ceiling: 100.0,
            series_growth_rate: 0.10,
            fatigue_limit: 80.0,
            asset_floor: 50.0,
            top_n: 3,
        }
    }

    /// Same cutoffs, with a custom at-risk threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        let mut base = Self::default_v1();
        base.at_risk_below = threshold;
        base
    }

    pub fn validate(&self) -> ScoreResult<()> {
        let cutoffs = [
            ("at_risk_below", self.at_risk_below),
            ("high_performer_at", self.high_performer_at),
            ("forecast_pivot", self.forecast_pivot),
            ("forecast_ceiling", self.forecast_ceiling),
            ("fatigue_limit", self.fatigue_limit),
            ("asset_floor", self.asset_floor),
        ];
        for (name, value) in cutoffs {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ScoreError::invalid(format!(
                    "policy cutoff {name}={value} must be within 0..=100"
                )));
            }
        }
        if self.at_risk_below > self.high_performer_at {
            return Err(ScoreError::invalid(format!(
                "at_risk_below ({}) exceeds high_performer_at ({})",
                self.at_risk_below, self.high_performer_at
            )));
        }
        let multipliers = [
            ("growth_multiplier", self.growth_multiplier),
            ("decay_multiplier", self.decay_multiplier),
            ("series_growth_rate", self.series_growth_rate),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::invalid(format!(
                    "policy {name}={value} must be finite and non-negative"
                )));
            }
        }
        if self.top_n == 0 {
            return Err(ScoreError::invalid("policy top_n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/policy.rs"]
mod tests;
