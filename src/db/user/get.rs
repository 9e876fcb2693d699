use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{User, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_user_by_id(user_id: Uuid, redis: RedisClient) -> Result<User, AppError> {
    let mut conn = db::conn(&redis).await?;

    let json: Option<String> = conn.get(RedisKey::user(user_id)).await?;
    let json = json.ok_or_else(|| AppError::NotFound("User not found".into()))?;

    serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
}

pub async fn get_user_by_email(email: &str, redis: RedisClient) -> Result<User, AppError> {
    let mut conn = db::conn(&redis).await?;

    let user_id: Option<String> = conn.get(RedisKey::user_email(email)).await?;
    let user_id = user_id.ok_or_else(|| {
        tracing::debug!("No user found for email: {}", email);
        AppError::NotFound("User not found".into())
    })?;

    let user_id = Uuid::parse_str(&user_id)
        .map_err(|e| AppError::Deserialization(format!("Invalid UUID from email lookup: {e}")))?;

    drop(conn);
    get_user_by_id(user_id, redis).await
}

pub async fn get_all_users(redis: RedisClient) -> Result<Vec<User>, AppError> {
    let mut conn = db::conn(&redis).await?;

    let ids: Vec<String> = conn.smembers(RedisKey::users_index()).await?;
    drop(conn);

    let mut users = Vec::with_capacity(ids.len());
    for id in ids {
        let Ok(user_id) = Uuid::parse_str(&id) else {
            tracing::warn!("Skipping malformed user id in index: {}", id);
            continue;
        };
        match get_user_by_id(user_id, redis.clone()).await {
            Ok(user) => users.push(user),
            Err(AppError::NotFound(_)) => {
                tracing::warn!("User {} indexed but missing", user_id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(users)
}
