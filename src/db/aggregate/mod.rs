pub mod get;

pub use get::get_or_create_aggregate;
