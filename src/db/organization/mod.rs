pub mod get;
pub mod patch;
pub mod post;

pub use get::{
    get_organization, get_organization_by_address, get_organization_by_owner,
    list_organizations_by_type,
};
pub use patch::{patch_organization, set_image_path};
pub use post::create_organization;
