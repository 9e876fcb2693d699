use uuid::Uuid;

use crate::{
    db::user_params::{get_user_params, save_user_params},
    errors::AppError,
    models::{UserParams, UserParamsPatch},
    state::RedisClient,
};

/// Applies a field mask to an existing user params record. An empty mask is
/// rejected up front so a malformed request never silently no-ops.
pub async fn patch_user_params(
    user_id: Uuid,
    patch: UserParamsPatch,
    redis: RedisClient,
) -> Result<UserParams, AppError> {
    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "patch contains no recognized fields".into(),
        ));
    }

    let mut params = get_user_params(user_id, redis.clone()).await?;
    patch.apply_to(&mut params);
    save_user_params(params, redis).await
}
