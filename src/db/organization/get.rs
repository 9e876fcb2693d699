use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{Organization, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_organization(id: u64, redis: RedisClient) -> Result<Organization, AppError> {
    let mut conn = db::conn(&redis).await?;

    let json: Option<String> = conn.get(RedisKey::organization(id)).await?;
    let json = json.ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
}

pub async fn get_organization_by_owner(
    owner_id: Uuid,
    redis: RedisClient,
) -> Result<Organization, AppError> {
    let mut conn = db::conn(&redis).await?;

    let id: Option<u64> = conn.get(RedisKey::organization_owner(owner_id)).await?;
    let id = id.ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    drop(conn);
    get_organization(id, redis).await
}

pub async fn get_organization_by_address(
    address: &str,
    redis: RedisClient,
) -> Result<Organization, AppError> {
    let mut conn = db::conn(&redis).await?;

    let id: Option<u64> = conn.get(RedisKey::organization_address(address)).await?;
    let id = id.ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    drop(conn);
    get_organization(id, redis).await
}

/// Organizations of one category, in creation order.
pub async fn list_organizations_by_type(
    organization_type: &str,
    redis: RedisClient,
) -> Result<Vec<Organization>, AppError> {
    let mut conn = db::conn(&redis).await?;

    let ids: Vec<u64> = conn
        .zrange(RedisKey::organizations_by_type(organization_type), 0, -1)
        .await?;
    drop(conn);

    let mut orgs = Vec::with_capacity(ids.len());
    for id in ids {
        match get_organization(id, redis.clone()).await {
            Ok(org) => orgs.push(org),
            Err(AppError::NotFound(_)) => {
                tracing::warn!("Organization {} indexed by type but missing", id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(orgs)
}
