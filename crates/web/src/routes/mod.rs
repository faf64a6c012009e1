pub mod artwork;
pub mod auth;
pub mod comment;
pub mod faq;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the full site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                      home
/// /about /contact        static pages
/// /login /logout         admin auth
///
/// /artworks              list, /artworks/{id} detail
/// /createArtworkPost     form + submit (admin-gated)
/// /updateArtwork/{id}    form + submit (admin-gated)
/// /deleteArtwork/{id}    delete (admin-gated)
///
/// /comments              list
/// /createComment         form + submit (visitor-gated)
/// /updateComments/{id}   form + submit (admin-gated)
/// /deleteComment/{id}    delete (admin-gated)
///
/// /faqs                  list
/// /askFAQ                form + submit (visitor-gated)
/// /updateFAQ/{id}        form + submit (admin-gated)
/// /deleteFaqs/{id}       delete (admin-gated)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(auth::router())
        .merge(artwork::router())
        .merge(comment::router())
        .merge(faq::router())
}
