//! Handlers for the FAQ resource.
//!
//! Questions are asked by visitors (the admin is rejected by the inverted
//! gate); answering happens through the admin-only update.

use askama::Template;
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_core::validation;
use atelier_db::models::faq::{NewFaq, UpdateFaq};
use atelier_db::repositories::FaqRepo;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::error::{AppError, AppResult};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::faq::{AskFaqPage, EditFaqPage, FaqListPage};

/// GET /faqs
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> AppResult<Html<String>> {
    let faqs = FaqRepo::list(&state.pool).await?;
    let page = FaqListPage {
        logged_in: user.is_admin(),
        faqs,
    };
    Ok(Html(page.render()?))
}

/// GET /askFAQ
pub async fn ask_form(user: CurrentUser) -> AppResult<Html<String>> {
    let page = AskFaqPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        question: String::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /askFAQ
pub async fn ask(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(input): Form<NewFaq>,
) -> AppResult<Response> {
    let field_errors = validation::faq_ask_errors(&input.question);
    let auth_errors = user.require_visitor("The admin can not ask an FAQ.");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let created = FaqRepo::create(&state.pool, &input).await?;
        tracing::info!(id = created.id, "faq question asked");
        return Ok(Redirect::to("/faqs").into_response());
    }

    let page = AskFaqPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        question: input.question,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /updateFAQ/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "FAQ", id }))?;
    let page = EditFaqPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        id,
        question: faq.question,
        answer: faq.answer.unwrap_or_default(),
    };
    Ok(Html(page.render()?))
}

/// POST /updateFAQ/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateFaq>,
) -> AppResult<Response> {
    let field_errors = validation::faq_update_errors(&input.question, &input.answer);
    let auth_errors = user.require_admin("update an FAQ");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let updated = FaqRepo::update(&state.pool, id, &input).await?;
        if !updated {
            return Err(AppError::Core(CoreError::NotFound { entity: "FAQ", id }));
        }
        tracing::info!(id, "faq updated");
        return Ok(Redirect::to("/faqs").into_response());
    }

    let page = EditFaqPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        id,
        question: input.question,
        answer: input.answer,
    };
    Ok(Html(page.render()?).into_response())
}

/// POST /deleteFaqs/{id}
///
/// Idempotent: deleting an id that no longer exists still redirects.
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !user.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "You have to be logged in to delete an FAQ.".to_string(),
        )));
    }

    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "faq deleted");
    }
    Ok(Redirect::to("/faqs"))
}
