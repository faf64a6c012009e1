//! Shared domain types for the Atelier portfolio site: identifiers, the
//! domain error enum, the session role, and the form validation rules.

pub mod error;
pub mod role;
pub mod types;
pub mod validation;
