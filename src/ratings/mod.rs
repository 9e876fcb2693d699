pub mod aggregate;
pub mod combine;
pub mod dimension;

pub use aggregate::{DimensionAggregate, RatedDimension, RatingAggregate, RatingEvent};
pub use combine::{DEFAULT_SCORE_THRESHOLD, combine_average, resolve_dimensions, retain_above};
pub use dimension::Dimension;

use thiserror::Error;

/// Errors raised by the rating core itself. Anything IO-related belongs to
/// the surrounding db layer, not here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    #[error("invalid rating value {value} for {dimension}")]
    InvalidRating { dimension: Dimension, value: i64 },

    #[error("dimension rated twice: {0}")]
    DuplicateDimension(Dimension),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("no dimensions provided")]
    EmptyDimensionSet,
}
