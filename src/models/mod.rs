pub mod comment;
pub mod organization;
pub mod redis;
pub mod user;
pub mod user_params;

pub use comment::Comment;
pub use organization::{ImageKind, Organization, OrganizationPatch};
pub use user::{PublicUser, Role, User};
pub use user_params::{UserParams, UserParamsPatch};
