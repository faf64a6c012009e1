//! Comment entity model and form DTOs.

use atelier_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A visitor comment row from the `comments` table. `reply` is filled in
/// by the admin after the fact and is absent on freshly created rows.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub name: String,
    pub comment: String,
    pub reply: Option<String>,
}

/// Submitted form fields for a public comment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub name: String,
    pub comment: String,
}

/// Submitted form fields for an admin comment update, including the reply.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComment {
    pub name: String,
    pub comment: String,
    pub reply: String,
}
