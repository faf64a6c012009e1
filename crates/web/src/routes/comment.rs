//! Route definitions for the comment resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// ```text
/// GET  /comments             -> list
/// GET  /createComment        -> new_form
/// POST /createComment        -> create
/// GET  /updateComments/{id}  -> edit_form
/// POST /updateComments/{id}  -> update
/// POST /deleteComment/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(comment::list))
        .route(
            "/createComment",
            get(comment::new_form).post(comment::create),
        )
        .route(
            "/updateComments/{id}",
            get(comment::edit_form).post(comment::update),
        )
        .route("/deleteComment/{id}", post(comment::delete))
}
