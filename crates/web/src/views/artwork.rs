use askama::Template;
use atelier_core::types::DbId;
use atelier_db::models::artwork::Artwork;

#[derive(Template)]
#[template(path = "artworks.html")]
pub struct ArtworkListPage {
    pub logged_in: bool,
    pub artworks: Vec<Artwork>,
}

#[derive(Template)]
#[template(path = "artwork.html")]
pub struct ArtworkDetailPage {
    pub logged_in: bool,
    pub artwork: Artwork,
}

/// Create form, re-rendered with violations and the submitted values on a
/// rejected submission.
#[derive(Template)]
#[template(path = "artwork_new.html")]
pub struct NewArtworkPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Update form, pre-filled from the stored row on GET.
#[derive(Template)]
#[template(path = "artwork_edit.html")]
pub struct EditArtworkPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
}
