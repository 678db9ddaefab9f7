use std::cmp::Ordering;

use crate::error::{ScoreError, ScoreResult};

/// Highest `n` entries by `selector`, descending. Equal keys keep their
/// input order. Returns fewer than `n` when the input is shorter.
pub fn top_n<T, F>(entities: &[T], selector: F, n: usize) -> ScoreResult<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if n == 0 {
        return Err(ScoreError::invalid("top_n requires n >= 1"));
    }
    let mut keyed: Vec<(f64, &T)> = entities.iter().map(|e| (selector(e), e)).collect();
    // stable sort
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    Ok(keyed
        .into_iter()
        .take(n)
        .map(|(_, entity)| entity.clone())
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/rank.rs"]
mod tests;
