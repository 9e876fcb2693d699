use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ratings::RatingEvent;

/// An immutable, append-only comment on one organization. `comment_avg` is
/// the mean of the event's non-zero values, computed once at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub organization_id: u64,
    pub author_id: Uuid,
    pub text: Option<String>,
    pub ratings: RatingEvent,
    pub comment_avg: Option<f64>,
    pub created_at: DateTime<Utc>,
}
