pub mod get;
pub mod post;

pub use get::list_comments;
pub use post::ingest_comment;
