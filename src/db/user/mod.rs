pub mod get;
pub mod post;

pub use get::{get_all_users, get_user_by_email, get_user_by_id};
pub use post::register_user;
