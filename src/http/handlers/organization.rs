use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::organization::{
        create_organization, get_organization_by_address, get_organization_by_owner,
        patch_organization,
    },
    errors::AppError,
    models::{Organization, OrganizationPatch},
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateOrganizationPayload {
    pub address: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organization_type: String,
}

#[derive(Deserialize)]
pub struct OrganizationByAddressPayload {
    pub address: String,
}

pub async fn create_organization_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateOrganizationPayload>,
) -> Result<Json<Organization>, (StatusCode, String)> {
    if !claims.role.can_manage_organization() {
        return Err(AppError::Forbidden("forbidden".into()).to_response());
    }
    let owner_id = claims.user_id().map_err(|e| e.to_response())?;

    if payload.address.trim().is_empty() || payload.organization_type.trim().is_empty() {
        return Err(
            AppError::BadRequest("address and organization_type are required".into())
                .to_response(),
        );
    }

    match create_organization(
        owner_id,
        payload.address,
        payload.longitude,
        payload.latitude,
        payload.organization_type,
        state.redis.clone(),
    )
    .await
    {
        Ok(org) => {
            tracing::info!("Organization {} created by {}", org.id, owner_id);
            Ok(Json(org))
        }
        Err(err) => {
            tracing::error!("Error creating organization: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_organization_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<Organization>, (StatusCode, String)> {
    if !claims.role.can_manage_organization() {
        return Err(AppError::Forbidden("forbidden".into()).to_response());
    }
    let owner_id = claims.user_id().map_err(|e| e.to_response())?;

    let org = get_organization_by_owner(owner_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(org))
}

pub async fn patch_organization_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(patch): Json<OrganizationPatch>,
) -> Result<Json<Organization>, (StatusCode, String)> {
    if !claims.role.can_manage_organization() {
        return Err(AppError::Forbidden("forbidden".into()).to_response());
    }
    let owner_id = claims.user_id().map_err(|e| e.to_response())?;

    let org = patch_organization(owner_id, patch, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error patching organization for {}: {}", owner_id, e);
            e.to_response()
        })?;

    Ok(Json(org))
}

// Public lookup used by the map frontend.
pub async fn get_organization_by_address_handler(
    State(state): State<AppState>,
    Json(payload): Json<OrganizationByAddressPayload>,
) -> Result<Json<Organization>, (StatusCode, String)> {
    let org = get_organization_by_address(&payload.address, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(org))
}
