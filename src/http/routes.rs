use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};

use crate::{
    http::handlers::{
        average_by_type_handler, average_handler, average_with_info_handler,
        create_comment_handler, create_organization_handler, create_user_params_handler,
        get_image_handler, get_organization_by_address_handler, get_organization_handler,
        get_user_params_handler, get_users_handler, list_comments_handler, login_handler,
        patch_organization_handler, patch_user_params_handler, register_handler,
        upload_map_handler, upload_picture_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();

    let auth_routes = Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(auth_routes)
        .route("/users", get(get_users_handler))
        .route("/user-params", post(create_user_params_handler))
        .route("/user-params/{user_id}", get(get_user_params_handler))
        .route("/user-params/{user_id}", patch(patch_user_params_handler))
        .route("/organization", post(create_organization_handler))
        .route("/organization", get(get_organization_handler))
        .route("/organization", patch(patch_organization_handler))
        .route(
            "/organization/public/by-address",
            post(get_organization_by_address_handler),
        )
        .route("/organization/params/average", post(average_handler))
        .route(
            "/organization/params/average/by-type",
            post(average_by_type_handler),
        )
        .route(
            "/organization/params/average/with-info",
            post(average_with_info_handler),
        )
        .route("/organization/comment", post(create_comment_handler))
        .route(
            "/organization/{organization_id}/comments",
            get(list_comments_handler),
        )
        .route(
            "/organization/{organization_id}/map/upload",
            post(upload_map_handler),
        )
        .route(
            "/organization/{organization_id}/picture/upload",
            post(upload_picture_handler),
        )
        .route(
            "/organization/{organization_id}/image/{kind}",
            get(get_image_handler),
        )
        .with_state(state)
}
