use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{Organization, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_organization(
    owner_id: Uuid,
    address: String,
    longitude: Option<f64>,
    latitude: Option<f64>,
    organization_type: String,
    redis: RedisClient,
) -> Result<Organization, AppError> {
    let mut conn = db::conn(&redis).await?;

    let owner_key = RedisKey::organization_owner(owner_id);
    let existing: Option<u64> = conn.get(&owner_key).await?;
    if existing.is_some() {
        return Err(AppError::Conflict("organization already exists".into()));
    }

    let id: u64 = conn.incr(RedisKey::organization_next_id(), 1).await?;

    let org = Organization {
        id,
        owner_id,
        address,
        longitude,
        latitude,
        organization_type,
        map_path: None,
        picture_path: None,
    };

    let json = serde_json::to_string(&org).map_err(|e| AppError::Serialization(e.to_string()))?;

    // Type listing is a sorted set scored by id, so members come back in
    // creation order.
    let _: () = redis::pipe()
        .atomic()
        .cmd("SET")
        .arg(RedisKey::organization(id))
        .arg(json)
        .ignore()
        .cmd("SET")
        .arg(&owner_key)
        .arg(id)
        .ignore()
        .cmd("SET")
        .arg(RedisKey::organization_address(&org.address))
        .arg(id)
        .ignore()
        .cmd("ZADD")
        .arg(RedisKey::organizations_by_type(&org.organization_type))
        .arg(id)
        .arg(id)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(org)
}
