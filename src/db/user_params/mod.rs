pub mod get;
pub mod patch;
pub mod post;

pub use get::get_user_params;
pub use patch::patch_user_params;
pub use post::save_user_params;
