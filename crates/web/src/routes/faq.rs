//! Route definitions for the FAQ resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// ```text
/// GET  /faqs             -> list
/// GET  /askFAQ           -> ask_form
/// POST /askFAQ           -> ask
/// GET  /updateFAQ/{id}   -> edit_form
/// POST /updateFAQ/{id}   -> update
/// POST /deleteFaqs/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(faq::list))
        .route("/askFAQ", get(faq::ask_form).post(faq::ask))
        .route("/updateFAQ/{id}", get(faq::edit_form).post(faq::update))
        .route("/deleteFaqs/{id}", post(faq::delete))
}
