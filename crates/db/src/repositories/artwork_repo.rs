//! Repository for the `artworks` table.

use atelier_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::artwork::{Artwork, ArtworkInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_url";

/// Provides CRUD operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ArtworkInput) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (title, description, image_url)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = ?");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artworks in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks ORDER BY id");
        sqlx::query_as::<_, Artwork>(&query).fetch_all(pool).await
    }

    /// Replace all fields of an artwork. Returns `false` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ArtworkInput,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE artworks SET title = ?, description = ?, image_url = ? WHERE id = ?")
                .bind(&input.title)
                .bind(&input.description)
                .bind(&input.image_url)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an artwork by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
