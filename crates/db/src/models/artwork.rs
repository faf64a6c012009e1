//! Artwork entity model and form DTO.

use atelier_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// An artwork row from the `artworks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Submitted form fields for creating or updating an artwork.
///
/// The same shape serves both operations; validation is identical.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
}
