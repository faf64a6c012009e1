use askama::Template;
use atelier_core::types::DbId;
use atelier_db::models::faq::Faq;

#[derive(Template)]
#[template(path = "faqs.html")]
pub struct FaqListPage {
    pub logged_in: bool,
    pub faqs: Vec<Faq>,
}

#[derive(Template)]
#[template(path = "faq_new.html")]
pub struct AskFaqPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub question: String,
}

#[derive(Template)]
#[template(path = "faq_edit.html")]
pub struct EditFaqPage {
    pub logged_in: bool,
    pub field_errors: Vec<String>,
    pub auth_errors: Vec<String>,
    pub id: DbId,
    pub question: String,
    pub answer: String,
}
