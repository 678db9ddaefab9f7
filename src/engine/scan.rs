use crate::error::ScoreResult;

/// Every entity scoring strictly below `threshold`, in input order.
pub fn find_at_risk<'a, T, F>(
    entities: &'a [T],
    score_fn: F,
    threshold: f64,
) -> ScoreResult<Vec<(&'a T, f64)>>
where
    F: Fn(&T) -> ScoreResult<f64>,
{
    let mut out = Vec::new();
    for entity in entities {
        let score = score_fn(entity)?;
        if score < threshold {
            out.push((entity, score));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/scan.rs"]
mod tests;
