use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::user_params::{get_user_params, patch_user_params, save_user_params},
    errors::AppError,
    models::{UserParams, UserParamsPatch},
    state::AppState,
};

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UserParamsPayload {
    #[serde(default)]
    pub appearance: bool,
    #[serde(default)]
    pub lighting: bool,
    #[serde(default)]
    pub smell: bool,
    #[serde(default)]
    pub temperature: bool,
    #[serde(default)]
    pub tactility: bool,
    #[serde(default)]
    pub signage: bool,
    #[serde(default)]
    pub intuitiveness: bool,
    #[serde(default)]
    pub staff_attitude: bool,
    #[serde(default)]
    pub people_density: bool,
    #[serde(default)]
    pub self_service: bool,
    #[serde(default)]
    pub calmness: bool,
}

pub async fn create_user_params_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<UserParamsPayload>,
) -> Result<Json<UserParams>, (StatusCode, String)> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let params = UserParams {
        user_id,
        appearance: payload.appearance,
        lighting: payload.lighting,
        smell: payload.smell,
        temperature: payload.temperature,
        tactility: payload.tactility,
        signage: payload.signage,
        intuitiveness: payload.intuitiveness,
        staff_attitude: payload.staff_attitude,
        people_density: payload.people_density,
        self_service: payload.self_service,
        calmness: payload.calmness,
    };

    let saved = save_user_params(params, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error saving user params for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(saved))
}

pub async fn get_user_params_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserParams>, (StatusCode, String)> {
    let params = get_user_params(user_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(params))
}

pub async fn patch_user_params_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(user_id): Path<Uuid>,
    Json(patch): Json<UserParamsPatch>,
) -> Result<Json<UserParams>, (StatusCode, String)> {
    let token_user = claims.user_id().map_err(|e| e.to_response())?;
    if token_user != user_id {
        return Err(
            AppError::Forbidden("can only update your own params".into()).to_response(),
        );
    }

    let params = patch_user_params(user_id, patch, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error patching user params for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(params))
}
