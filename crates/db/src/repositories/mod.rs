//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod artwork_repo;
pub mod comment_repo;
pub mod faq_repo;

pub use artwork_repo::ArtworkRepo;
pub use comment_repo::CommentRepo;
pub use faq_repo::FaqRepo;
