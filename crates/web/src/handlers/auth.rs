//! Handlers for admin login and logout.

use askama::Template;
use atelier_core::role::Role;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::session::{self, CurrentUser};
use crate::state::AppState;
use crate::views::auth::LoginPage;

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn login_form(user: CurrentUser) -> AppResult<Html<String>> {
    let page = LoginPage {
        logged_in: user.is_admin(),
        errors: Vec::new(),
        username: String::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /login
///
/// The username and password checks are performed unconditionally so the
/// re-rendered form can list every applicable reason at once; the final
/// password check is an Argon2 hash verification, never string equality.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let admin = &state.config.admin;

    let mut errors = Vec::new();
    if input.username.is_empty() {
        errors.push("Username cannot be empty.".to_string());
    }
    if input.username != admin.username {
        errors.push("Username was incorrect.".to_string());
    }
    if input.password.is_empty() {
        errors.push("Password cannot be empty.".to_string());
    }

    if input.username == admin.username {
        let verified = verify_password(&input.password, &admin.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if verified {
            session::set_role(&session, Role::Admin).await?;
            tracing::info!("administrator logged in");
            return Ok(Redirect::to("/").into_response());
        }
        errors.push("Password is incorrect.".to_string());
    }

    tracing::info!("rejected login attempt");
    let page = LoginPage {
        logged_in: false,
        errors,
        username: input.username,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /logout
///
/// Destroys the session. Always succeeds; logging out twice is a no-op.
pub async fn logout(session: Session) -> AppResult<Redirect> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}
