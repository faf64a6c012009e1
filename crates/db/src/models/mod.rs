//! Entity models and form-input DTOs.

pub mod artwork;
pub mod comment;
pub mod faq;
