//! Session-backed visitor identity and the authorization gates.

use atelier_core::role::Role;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::error::AppError;

/// Session key under which the visitor's [`Role`] is stored.
pub const ROLE_KEY: &str = "role";

/// The visitor making the current request, resolved from the server-side
/// session. Sessions are created lazily; a request without one is treated
/// as [`Role::Anonymous`].
///
/// Use this as an extractor parameter in any handler that needs to know who
/// is asking:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Html<String>> {
///     let page = HomePage { logged_in: user.is_admin() };
///     Ok(Html(page.render()?))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Admin gate for mutating routes.
    ///
    /// Returns one "must be logged in" message when the session is not
    /// marked admin, otherwise an empty list. A handler mutates only when
    /// this list and the field-violation list are both empty.
    pub fn require_admin(&self, action: &str) -> Vec<String> {
        if self.is_admin() {
            Vec::new()
        } else {
            vec![format!("You have to be logged in to {action}.")]
        }
    }

    /// Inverted gate for visitor-facing submissions (public comments and
    /// FAQ questions): the admin is rejected with `message`.
    pub fn require_visitor(&self, message: &str) -> Vec<String> {
        if self.is_admin() {
            vec![message.to_string()]
        } else {
            Vec::new()
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(format!("Session layer missing: {msg}")))?;

        let role = session.get::<Role>(ROLE_KEY).await?.unwrap_or_default();
        Ok(CurrentUser { role })
    }
}

/// Record `role` in the session. Used by the login handler after a
/// successful credential check.
pub async fn set_role(session: &Session, role: Role) -> Result<(), tower_sessions::session::Error> {
    session.insert(ROLE_KEY, role).await
}
