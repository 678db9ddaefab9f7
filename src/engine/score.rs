use crate::error::{ScoreError, ScoreResult};
use crate::model::entity::{Entity, ScoredEntity, check_range};
use crate::model::policy::ScoringPolicy;
use crate::model::risk::RiskClass;

/// Rounded arithmetic mean of the entity's metric set.
pub fn composite_score<E: Entity + ?Sized>(entity: &E) -> ScoreResult<f64> {
    let metrics = entity.metrics();
    if metrics.is_empty() {
        return Err(ScoreError::invalid(format!(
            "entity '{}' has no metrics",
            entity.name()
        )));
    }
    let mut sum = 0.0f64;
    for (name, &value) in metrics {
        check_range(&format!("{}.{name}", entity.name()), value)?;
        sum += value;
    }
    Ok((sum / metrics.len() as f64).round())
}

/// One-step projection with the default policy multipliers.
pub fn forecast(current_score: f64) -> f64 {
    forecast_with(current_score, &ScoringPolicy::default_v1())
}

/// Growth above the pivot, decay at or below it. Capped at the ceiling,
/// never floored.
pub fn forecast_with(current_score: f64, policy: &ScoringPolicy) -> f64 {
    let multiplier = if current_score > policy.forecast_pivot {
        policy.growth_multiplier
    } else {
        policy.decay_multiplier
    };
    (current_score * multiplier).round().min(policy.forecast_ceiling)
}

pub fn classify_risk(score: f64, policy: &ScoringPolicy) -> RiskClass {
    if score < policy.at_risk_below {
        RiskClass::AtRisk
    } else if score >= policy.high_performer_at {
        RiskClass::HighPerformer
    } else {
        RiskClass::Stable
    }
}

pub fn linear_forecast(series: &[f64], growth_rate: f64) -> ScoreResult<f64> {
    let last = series
        .last()
        .copied()
        .ok_or_else(|| ScoreError::invalid("cannot forecast an empty series"))?;
    Ok((last * (1.0 + growth_rate)).round())
}

pub fn score_entity<T: Entity + Clone>(
    entity: &T,
    policy: &ScoringPolicy,
) -> ScoreResult<ScoredEntity<T>> {
    let composite = composite_score(entity)?;
    Ok(ScoredEntity {
        entity: entity.clone(),
        composite_score: composite,
        forecast_score: forecast_with(composite, policy),
        risk: classify_risk(composite, policy),
    })
}

pub fn score_all<T: Entity + Clone>(
    entities: &[T],
    policy: &ScoringPolicy,
) -> ScoreResult<Vec<ScoredEntity<T>>> {
    entities.iter().map(|e| score_entity(e, policy)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/score.rs"]
mod tests;
