use uuid::Uuid;

use crate::{
    db::{self, organization::get::get_organization_by_owner},
    errors::AppError,
    models::{ImageKind, Organization, OrganizationPatch, redis::RedisKey},
    state::RedisClient,
};

/// Applies a field mask to the caller's organization. Address and type
/// changes also move the corresponding lookup index entries, all in one
/// transaction.
pub async fn patch_organization(
    owner_id: Uuid,
    patch: OrganizationPatch,
    redis: RedisClient,
) -> Result<Organization, AppError> {
    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "patch contains no recognized fields".into(),
        ));
    }

    let mut org = get_organization_by_owner(owner_id, redis.clone()).await?;
    let old_address = org.address.clone();
    let old_type = org.organization_type.clone();

    if let Some(address) = patch.address {
        org.address = address;
    }
    if let Some(longitude) = patch.longitude {
        org.longitude = Some(longitude);
    }
    if let Some(latitude) = patch.latitude {
        org.latitude = Some(latitude);
    }
    if let Some(organization_type) = patch.organization_type {
        org.organization_type = organization_type;
    }

    let json = serde_json::to_string(&org).map_err(|e| AppError::Serialization(e.to_string()))?;

    let mut pipe = redis::pipe();
    pipe.atomic()
        .cmd("SET")
        .arg(RedisKey::organization(org.id))
        .arg(json)
        .ignore();

    if org.address != old_address {
        pipe.cmd("DEL")
            .arg(RedisKey::organization_address(&old_address))
            .ignore()
            .cmd("SET")
            .arg(RedisKey::organization_address(&org.address))
            .arg(org.id)
            .ignore();
    }
    if org.organization_type != old_type {
        pipe.cmd("ZREM")
            .arg(RedisKey::organizations_by_type(&old_type))
            .arg(org.id)
            .ignore()
            .cmd("ZADD")
            .arg(RedisKey::organizations_by_type(&org.organization_type))
            .arg(org.id)
            .arg(org.id)
            .ignore();
    }

    let mut conn = db::conn(&redis).await?;
    let _: () = pipe
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(org)
}

pub async fn set_image_path(
    mut org: Organization,
    kind: ImageKind,
    path: String,
    redis: RedisClient,
) -> Result<Organization, AppError> {
    match kind {
        ImageKind::Map => org.map_path = Some(path),
        ImageKind::Picture => org.picture_path = Some(path),
    }

    let json = serde_json::to_string(&org).map_err(|e| AppError::Serialization(e.to_string()))?;

    let mut conn = db::conn(&redis).await?;
    let _: () = redis::cmd("SET")
        .arg(RedisKey::organization(org.id))
        .arg(json)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(org)
}
