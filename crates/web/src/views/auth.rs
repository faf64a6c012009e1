use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub logged_in: bool,
    pub errors: Vec<String>,
    pub username: String,
}
