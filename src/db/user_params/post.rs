use redis::AsyncCommands;

use crate::{
    db,
    errors::AppError,
    models::{UserParams, redis::RedisKey},
    state::RedisClient,
};

pub async fn save_user_params(params: UserParams, redis: RedisClient) -> Result<UserParams, AppError> {
    let mut conn = db::conn(&redis).await?;

    let json =
        serde_json::to_string(&params).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = conn.set(RedisKey::user_params(params.user_id), json).await?;

    Ok(params)
}
