use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{UserParams, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_user_params(user_id: Uuid, redis: RedisClient) -> Result<UserParams, AppError> {
    let mut conn = db::conn(&redis).await?;

    let json: Option<String> = conn.get(RedisKey::user_params(user_id)).await?;
    let json = json.ok_or_else(|| AppError::NotFound("User params not found".into()))?;

    serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
}
