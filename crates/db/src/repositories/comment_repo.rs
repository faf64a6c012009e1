//! Repository for the `comments` table.

use atelier_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::comment::{Comment, NewComment, UpdateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, comment, reply";

/// Provides CRUD operations for visitor comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment with no reply yet, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (name, comment)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.name)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = ?");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Replace all fields of a comment, including the admin reply. Returns
    /// `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE comments SET name = ?, comment = ?, reply = ? WHERE id = ?")
                .bind(&input.name)
                .bind(&input.comment)
                .bind(&input.reply)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a comment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
