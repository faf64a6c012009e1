//! Askama page templates, one module per resource.
//!
//! Every page struct carries `logged_in` for the shared navigation in
//! `base.html`. Form pages additionally carry the field-violation and
//! auth-violation lists plus the submitted values, so a rejected
//! submission re-renders with everything the visitor already typed.

pub mod artwork;
pub mod auth;
pub mod comment;
pub mod faq;
pub mod pages;
