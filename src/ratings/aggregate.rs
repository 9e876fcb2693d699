use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ratings::{Dimension, RatingError};

/// One scored dimension inside a comment. A value of 0 means the rater left
/// the slider untouched; the remark is stored either way but never aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedDimension {
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Sparse set of dimension ratings carried by a single comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingEvent {
    #[serde(default)]
    entries: BTreeMap<Dimension, RatedDimension>,
}

impl RatingEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating for one dimension. Values outside the stored u32
    /// range (negative or oversized) are out of contract and rejected, as
    /// is rating the same dimension twice in one event; 0 is kept as
    /// "not scored" so an attached remark survives.
    pub fn rate(
        &mut self,
        dimension: Dimension,
        value: i64,
        remark: Option<String>,
    ) -> Result<(), RatingError> {
        if self.entries.contains_key(&dimension) {
            return Err(RatingError::DuplicateDimension(dimension));
        }
        let value = u32::try_from(value)
            .map_err(|_| RatingError::InvalidRating { dimension, value })?;
        self.entries
            .insert(dimension, RatedDimension { value, remark });
        Ok(())
    }

    pub fn get(&self, dimension: Dimension) -> Option<&RatedDimension> {
        self.entries.get(&dimension)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn scored(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        self.entries
            .iter()
            .filter(|(_, r)| r.value > 0)
            .map(|(d, r)| (*d, r.value))
    }

    /// Mean over the event's non-zero values; `None` when nothing was scored.
    /// This is a property of the single comment, not of the running aggregate.
    pub fn comment_avg(&self) -> Option<f64> {
        let mut sum: u64 = 0;
        let mut count: u64 = 0;
        for (_, value) in self.scored() {
            sum += value as u64;
            count += 1;
        }
        (count > 0).then(|| sum as f64 / count as f64)
    }
}

/// Running sum/count/average for one dimension of one organization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DimensionAggregate {
    pub sum: u64,
    pub count: u64,
    pub avg: f64,
}

/// Per-organization running rating aggregates, one slot per dimension.
///
/// Counters only grow; there is no retraction or edit path. The record is
/// created lazily on first access and deleted only with its organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub organization_id: u64,
    dimensions: BTreeMap<Dimension, DimensionAggregate>,
}

impl RatingAggregate {
    pub fn empty(organization_id: u64) -> Self {
        let dimensions = Dimension::ALL
            .iter()
            .map(|d| (*d, DimensionAggregate::default()))
            .collect();
        Self {
            organization_id,
            dimensions,
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> DimensionAggregate {
        self.dimensions.get(&dimension).copied().unwrap_or_default()
    }

    pub fn avg_of(&self, dimension: Dimension) -> f64 {
        self.dimension(dimension).avg
    }

    /// Folds one rating event into the running aggregates and returns the
    /// event's own comment average.
    ///
    /// Only dimensions scored with a non-zero value touch their slot:
    /// `sum += v`, `count += 1`, `avg = sum / count`. Everything else is
    /// left exactly as it was.
    pub fn apply(&mut self, event: &RatingEvent) -> Option<f64> {
        for (dimension, value) in event.scored() {
            let slot = self.dimensions.entry(dimension).or_default();
            slot.sum += value as u64;
            slot.count += 1;
            slot.avg = slot.sum as f64 / slot.count as f64;
        }
        event.comment_avg()
    }
}
