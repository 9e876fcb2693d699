use redis::AsyncCommands;

use crate::{
    db,
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

/// All comments for an organization, newest first.
pub async fn list_comments(
    organization_id: u64,
    redis: RedisClient,
) -> Result<Vec<Comment>, AppError> {
    let mut conn = db::conn(&redis).await?;

    let raw: Vec<String> = conn
        .lrange(RedisKey::comments(organization_id), 0, -1)
        .await?;

    raw.iter()
        .map(|json| {
            serde_json::from_str(json).map_err(|e| AppError::Deserialization(e.to_string()))
        })
        .collect()
}
