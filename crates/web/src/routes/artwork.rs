//! Route definitions for the artwork resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artwork;
use crate::state::AppState;

/// ```text
/// GET  /artworks            -> list
/// GET  /artworks/{id}       -> detail
/// GET  /createArtworkPost   -> new_form
/// POST /createArtworkPost   -> create
/// GET  /updateArtwork/{id}  -> edit_form
/// POST /updateArtwork/{id}  -> update
/// POST /deleteArtwork/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artworks", get(artwork::list))
        .route("/artworks/{id}", get(artwork::detail))
        .route(
            "/createArtworkPost",
            get(artwork::new_form).post(artwork::create),
        )
        .route(
            "/updateArtwork/{id}",
            get(artwork::edit_form).post(artwork::update),
        )
        .route("/deleteArtwork/{id}", post(artwork::delete))
}
