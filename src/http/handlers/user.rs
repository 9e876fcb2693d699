use axum::{Json, extract::State, http::StatusCode};

use crate::{db::user::get_all_users, models::PublicUser, state::AppState};

pub async fn get_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, (StatusCode, String)> {
    let users = get_all_users(state.redis.clone()).await.map_err(|e| {
        tracing::error!("Error listing users: {}", e);
        e.to_response()
    })?;

    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}
