//! Handlers for the artwork resource (admin-managed).

use askama::Template;
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_core::validation;
use atelier_db::models::artwork::ArtworkInput;
use atelier_db::repositories::ArtworkRepo;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::error::{AppError, AppResult};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::artwork::{ArtworkDetailPage, ArtworkListPage, EditArtworkPage, NewArtworkPage};

/// GET /artworks
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> AppResult<Html<String>> {
    let artworks = ArtworkRepo::list(&state.pool).await?;
    let page = ArtworkListPage {
        logged_in: user.is_admin(),
        artworks,
    };
    Ok(Html(page.render()?))
}

/// GET /artworks/{id}
pub async fn detail(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let artwork = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    let page = ArtworkDetailPage {
        logged_in: user.is_admin(),
        artwork,
    };
    Ok(Html(page.render()?))
}

/// GET /createArtworkPost
pub async fn new_form(user: CurrentUser) -> AppResult<Html<String>> {
    let page = NewArtworkPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        title: String::new(),
        description: String::new(),
        image_url: String::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /createArtworkPost
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(input): Form<ArtworkInput>,
) -> AppResult<Response> {
    let field_errors =
        validation::artwork_errors(&input.title, &input.description, &input.image_url);
    let auth_errors = user.require_admin("create an artwork post");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let created = ArtworkRepo::create(&state.pool, &input).await?;
        tracing::info!(id = created.id, "artwork created");
        return Ok(Redirect::to("/artworks").into_response());
    }

    let page = NewArtworkPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        title: input.title,
        description: input.description,
        image_url: input.image_url,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /updateArtwork/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let artwork = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    let page = EditArtworkPage {
        logged_in: user.is_admin(),
        field_errors: Vec::new(),
        auth_errors: Vec::new(),
        id,
        title: artwork.title,
        description: artwork.description,
        image_url: artwork.image_url,
    };
    Ok(Html(page.render()?))
}

/// POST /updateArtwork/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Form(input): Form<ArtworkInput>,
) -> AppResult<Response> {
    let field_errors =
        validation::artwork_errors(&input.title, &input.description, &input.image_url);
    let auth_errors = user.require_admin("update an artwork post");

    if field_errors.is_empty() && auth_errors.is_empty() {
        let updated = ArtworkRepo::update(&state.pool, id, &input).await?;
        if !updated {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Artwork",
                id,
            }));
        }
        tracing::info!(id, "artwork updated");
        return Ok(Redirect::to("/artworks").into_response());
    }

    let page = EditArtworkPage {
        logged_in: user.is_admin(),
        field_errors,
        auth_errors,
        id,
        title: input.title,
        description: input.description,
        image_url: input.image_url,
    };
    Ok(Html(page.render()?).into_response())
}

/// POST /deleteArtwork/{id}
///
/// Idempotent: deleting an id that no longer exists still redirects.
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !user.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "You have to be logged in to delete an artwork post.".to_string(),
        )));
    }

    let deleted = ArtworkRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "artwork deleted");
    }
    Ok(Redirect::to("/artworks"))
}
