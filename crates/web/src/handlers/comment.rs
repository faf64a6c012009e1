//! Handlers for the comment resource.
//!
//! Creation is visitor-facing (the admin is rejected by the inverted
//! gate); update and delete are admin-only.

use askama::Template;
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_core::validation;
use atelier_db::models::comment::{NewComment, UpdateComment};
use atelier_db::repositories::CommentRepo;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::error::{AppError, AppResult};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::comment::{CommentListPage, EditCommentPage, NewCommentPage};

/// GET /comments
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> AppResult<Html<String>> {
    let comments = CommentRepo::list(&state.pool).await?;
    let page = CommentListPage {
        logged_in: user.is_admin(),
        comments,
    };
    Ok(Html(page.render()?))
}

/// GET /createComment
pub async fn new_form(user: CurrentUser) -> AppResult<Html<String>> {
    let page = NewCommentPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        name: String::new(),
        comment: String::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /createComment
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(input): Form<NewComment>,
) -> AppResult<Response> {
    let field_errors = validation::comment_create_errors(&input.name, &input.comment);
    let auth_errors = user.require_visitor("You cannot post a comment as an admin.");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let created = CommentRepo::create(&state.pool, &input).await?;
        tracing::info!(id = created.id, "comment created");
        return Ok(Redirect::to("/comments").into_response());
    }

    let page = NewCommentPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        name: input.name,
        comment: input.comment,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /updateComments/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    let page = EditCommentPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        id,
        name: comment.name,
        comment: comment.comment,
        reply: comment.reply.unwrap_or_default(),
    };
    Ok(Html(page.render()?))
}

/// POST /updateComments/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateComment>,
) -> AppResult<Response> {
    let field_errors =
        validation::comment_update_errors(&input.name, &input.comment, &input.reply);
    let auth_errors = user.require_admin("update a comment");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let updated = CommentRepo::update(&state.pool, id, &input).await?;
        if !updated {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Comment",
                id,
            }));
        }
        tracing::info!(id, "comment updated");
        return Ok(Redirect::to("/comments").into_response());
    }

    let page = EditCommentPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        id,
        name: input.name,
        comment: input.comment,
        reply: input.reply,
    };
    Ok(Html(page.render()?).into_response())
}

/// POST /deleteComment/{id}
///
/// Idempotent: deleting an id that no longer exists still redirects.
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !user.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "You have to be logged in to delete a comment.".to_string(),
        )));
    }

    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "comment deleted");
    }
    Ok(Redirect::to("/comments"))
}
