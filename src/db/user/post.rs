use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    auth::hash_password,
    db,
    errors::AppError,
    models::{Role, User, redis::RedisKey},
    state::RedisClient,
};

pub async fn register_user(
    name: String,
    email: String,
    password: String,
    role: Role,
    redis: RedisClient,
) -> Result<User, AppError> {
    let mut conn = db::conn(&redis).await?;

    let email_key = RedisKey::user_email(&email);
    let existing: Option<String> = conn.get(&email_key).await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "user with email {email} already exists"
        )));
    }

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        role,
        password_hash: hash_password(&password)?,
    };

    let json = serde_json::to_string(&user).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = redis::pipe()
        .atomic()
        .cmd("SET")
        .arg(RedisKey::user(user.id))
        .arg(json)
        .ignore()
        .cmd("SET")
        .arg(&email_key)
        .arg(user.id.to_string())
        .ignore()
        .cmd("SADD")
        .arg(RedisKey::users_index())
        .arg(user.id.to_string())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(user)
}
