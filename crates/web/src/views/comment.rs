use askama::Template;
use atelier_core::types::DbId;
use atelier_db::models::comment::Comment;

#[derive(Template)]
#[template(path = "comments.html")]
pub struct CommentListPage {
    pub logged_in: bool,
    pub comments: Vec<Comment>,
}

#[derive(Template)]
#[template(path = "comment_new.html")]
pub struct NewCommentPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub name: String,
    pub comment: String,
}

#[derive(Template)]
#[template(path = "comment_edit.html")]
pub struct EditCommentPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub id: DbId,
    pub name: String,
    pub comment: String,
    pub reply: String,
}
