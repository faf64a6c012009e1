//! Handlers for the static site pages.

use askama::Template;
use axum::response::Html;

use crate::error::AppResult;
use crate::session::CurrentUser;
use crate::views::pages::{AboutPage, ContactPage, HomePage};

/// GET /
pub async fn home(user: CurrentUser) -> AppResult<Html<String>> {
    let page = HomePage {
        logged_in: user.is_admin(),
    };
    Ok(Html(page.render()?))
}

/// GET /about
pub async fn about(user: CurrentUser) -> AppResult<Html<String>> {
    let page = AboutPage {
        logged_in: user.is_admin(),
    };
    Ok(Html(page.render()?))
}

/// GET /contact
pub async fn contact(user: CurrentUser) -> AppResult<Html<String>> {
    let page = ContactPage {
        logged_in: user.is_admin(),
    };
    Ok(Html(page.render()?))
}
