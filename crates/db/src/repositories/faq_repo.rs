//! Repository for the `faqs` table.

use atelier_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::faq::{Faq, NewFaq, UpdateFaq};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer";

/// Provides CRUD operations for FAQs.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new unanswered question, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question)
             VALUES (?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .fetch_one(pool)
            .await
    }

    /// Find an FAQ by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = ?");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all FAQs in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY id");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Replace the question and answer of an FAQ. Returns `false` if no row
    /// with the given `id` exists.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &UpdateFaq) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE faqs SET question = ?, answer = ? WHERE id = ?")
            .bind(&input.question)
            .bind(&input.answer)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an FAQ by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
