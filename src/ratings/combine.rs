use crate::ratings::{Dimension, RatingAggregate, RatingError};

/// Threshold applied by the by-type ranking endpoint when the caller does
/// not supply one.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 3.0;

/// Resolves caller-supplied dimension names, failing on the first name that
/// does not match a canonical identifier or accepted alias.
pub fn resolve_dimensions(names: &[String]) -> Result<Vec<Dimension>, RatingError> {
    if names.is_empty() {
        return Err(RatingError::EmptyDimensionSet);
    }
    names
        .iter()
        .map(|raw| {
            Dimension::resolve(raw).ok_or_else(|| RatingError::UnknownDimension(raw.clone()))
        })
        .collect()
}

/// Combines a subset of an aggregate's per-dimension averages into a single
/// comparison score.
///
/// Unconditional mean: every requested dimension contributes its stored
/// average, including never-rated ones contributing 0, and the sum is
/// divided by the number of requested dimensions.
pub fn combine_average(aggregate: &RatingAggregate, dimensions: &[Dimension]) -> f64 {
    if dimensions.is_empty() {
        return 0.0;
    }
    let sum: f64 = dimensions.iter().map(|d| aggregate.avg_of(*d)).sum();
    sum / dimensions.len() as f64
}

/// Keeps only entries scoring strictly above the threshold, in input order.
/// A score exactly equal to the threshold is excluded.
pub fn retain_above<T>(scored: Vec<(T, f64)>, threshold: f64) -> Vec<(T, f64)> {
    scored
        .into_iter()
        .filter(|(_, score)| *score > threshold)
        .collect()
}
