//! Authentication helpers.

pub mod password;
