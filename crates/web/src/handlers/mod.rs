//! Route handlers.
//!
//! Mutating handlers all follow the same shape: run the pure validation
//! function and the session gate, and either perform the store mutation
//! and redirect to the list view, or re-render the originating form with
//! both violation lists and the submitted values.

pub mod artwork;
pub mod auth;
pub mod comment;
pub mod faq;
pub mod pages;
