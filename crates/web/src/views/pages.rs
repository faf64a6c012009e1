use askama::Template;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub logged_in: bool,
}

/// Rendered by [`crate::error::AppError`] for 4xx/5xx responses.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub logged_in: bool,
    pub status: u16,
    pub message: String,
}
