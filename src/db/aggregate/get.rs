use redis::AsyncCommands;

use crate::{
    db, errors::AppError, models::redis::RedisKey, ratings::RatingAggregate, state::RedisClient,
};

/// Get-or-create semantics: a read for an organization with no aggregate
/// yet persists an all-zero record and returns it as if it had always
/// existed. SET NX keeps concurrent first reads from clobbering each other.
pub async fn get_or_create_aggregate(
    organization_id: u64,
    redis: RedisClient,
) -> Result<RatingAggregate, AppError> {
    let mut conn = db::conn(&redis).await?;

    let key = RedisKey::aggregate(organization_id);

    let json: Option<String> = conn.get(&key).await?;
    if let Some(json) = json {
        return serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()));
    }

    let empty = RatingAggregate::empty(organization_id);
    let json = serde_json::to_string(&empty).map_err(|e| AppError::Serialization(e.to_string()))?;

    let created: bool = conn.set_nx(&key, json).await?;
    if created {
        return Ok(empty);
    }

    // Lost the race; someone else created it first.
    let json: Option<String> = conn.get(&key).await?;
    let json = json.ok_or(AppError::InternalError)?;
    serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
}
