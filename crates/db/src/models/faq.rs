//! FAQ entity model and form DTOs.

use atelier_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// An FAQ row from the `faqs` table. `answer` is absent until the admin
/// answers the question via update.
#[derive(Debug, Clone, FromRow)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: Option<String>,
}

/// Submitted form fields for a publicly asked question.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFaq {
    pub question: String,
}

/// Submitted form fields for an admin FAQ update, including the answer.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaq {
    pub question: String,
    pub answer: String,
}
