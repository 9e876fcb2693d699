use chrono::Utc;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::{self, aggregate::get_or_create_aggregate, organization::get::get_organization},
    errors::AppError,
    models::{Comment, redis::RedisKey},
    ratings::{RatingAggregate, RatingEvent},
    state::{AggregateLocks, RedisClient, aggregate_lock},
};

/// Ingests one comment against one organization.
///
/// Holds the organization's aggregate lock across the whole
/// read-modify-write so two concurrent comments on the same organization
/// cannot lose an update, then commits the comment and the updated
/// aggregate in a single MULTI/EXEC pipeline: either both land or neither
/// does.
pub async fn ingest_comment(
    organization_id: u64,
    author_id: Uuid,
    text: Option<String>,
    event: RatingEvent,
    redis: RedisClient,
    locks: AggregateLocks,
) -> Result<(Comment, RatingAggregate), AppError> {
    get_organization(organization_id, redis.clone()).await?;

    let lock = aggregate_lock(&locks, organization_id).await;
    let _guard = lock.lock().await;

    let mut aggregate = get_or_create_aggregate(organization_id, redis.clone()).await?;

    let mut conn = db::conn(&redis).await?;
    let comment_id: u64 = conn.incr(RedisKey::comment_next_id(), 1).await?;

    let comment_avg = aggregate.apply(&event);
    let comment = Comment {
        id: comment_id,
        organization_id,
        author_id,
        text,
        ratings: event,
        comment_avg,
        created_at: Utc::now(),
    };

    let aggregate_json =
        serde_json::to_string(&aggregate).map_err(|e| AppError::Serialization(e.to_string()))?;
    let comment_json =
        serde_json::to_string(&comment).map_err(|e| AppError::Serialization(e.to_string()))?;

    // LPUSH keeps the list newest first.
    let _: () = redis::pipe()
        .atomic()
        .cmd("SET")
        .arg(RedisKey::aggregate(organization_id))
        .arg(aggregate_json)
        .ignore()
        .cmd("LPUSH")
        .arg(RedisKey::comments(organization_id))
        .arg(comment_json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok((comment, aggregate))
}
