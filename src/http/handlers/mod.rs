pub mod auth;
pub mod comment;
pub mod media;
pub mod organization;
pub mod params;
pub mod user;
pub mod user_params;

pub use auth::{login_handler, register_handler};
pub use comment::{create_comment_handler, list_comments_handler};
pub use media::{get_image_handler, upload_map_handler, upload_picture_handler};
pub use organization::{
    create_organization_handler, get_organization_by_address_handler, get_organization_handler,
    patch_organization_handler,
};
pub use params::{average_by_type_handler, average_handler, average_with_info_handler};
pub use user::get_users_handler;
pub use user_params::{
    create_user_params_handler, get_user_params_handler, patch_user_params_handler,
};
