use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{generate_jwt, verify_password},
    db::user::{get_user_by_email, register_user},
    errors::AppError,
    models::{PublicUser, Role},
    state::AppState,
};

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    if payload.name.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest("name and password are required".into()).to_response());
    }
    if !payload.email.contains('@') {
        return Err(AppError::BadRequest("invalid email".into()).to_response());
    }

    let role = payload.role.unwrap_or_default();
    match register_user(
        payload.name,
        payload.email.clone(),
        payload.password,
        role,
        state.redis.clone(),
    )
    .await
    {
        Ok(user) => {
            let token = generate_jwt(&user).map_err(|e| e.to_response())?;
            tracing::info!("Registered user: {}", user.id);
            Ok(Json(AuthResponse {
                token,
                user: user.into(),
            }))
        }
        Err(err) => {
            tracing::error!("Error registering user {}: {}", payload.email, err);
            Err(err.to_response())
        }
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let user = get_user_by_email(&payload.email, state.redis.clone())
        .await
        .map_err(|_| {
            // Same answer for unknown email and wrong password.
            AppError::Unauthorized("invalid credentials".into()).to_response()
        })?;

    let valid =
        verify_password(&payload.password, &user.password_hash).map_err(|e| e.to_response())?;
    if !valid {
        return Err(AppError::Unauthorized("invalid credentials".into()).to_response());
    }

    let token = generate_jwt(&user).map_err(|e| e.to_response())?;
    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
