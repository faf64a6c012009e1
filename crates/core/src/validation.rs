//! Form validation for the three site entities.
//!
//! Each function is pure: it inspects the submitted field strings and
//! returns an ordered list of human-readable violation messages. An empty
//! list means the submission is acceptable to persist. Length bounds are
//! inclusive and counted in Unicode scalar values, applied identically on
//! create and update.

/// Maximum accepted artwork title length.
pub const MAX_TITLE_LEN: usize = 50;
/// Maximum accepted artwork description length.
pub const MAX_DESCRIPTION_LEN: usize = 300;
/// Maximum accepted commenter name length.
pub const MAX_NAME_LEN: usize = 30;
/// Maximum accepted comment body length.
pub const MAX_COMMENT_LEN: usize = 300;
/// Maximum accepted admin reply length.
pub const MAX_REPLY_LEN: usize = 300;
/// Minimum accepted FAQ question length.
pub const MIN_QUESTION_LEN: usize = 10;
/// Maximum accepted FAQ question length.
pub const MAX_QUESTION_LEN: usize = 100;
/// Maximum accepted FAQ answer length.
pub const MAX_ANSWER_LEN: usize = 300;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Push a violation if `value` falls outside the inclusive `min..=max`
/// character range.
fn check_range(errors: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let len = char_len(value);
    if len < min {
        let noun = if min == 1 { "character" } else { "characters" };
        errors.push(format!("{field} must contain at least {min} {noun}."));
    } else if len > max {
        errors.push(format!("{field} must contain at most {max} characters."));
    }
}

/// Violations for an artwork create or update submission.
pub fn artwork_errors(title: &str, description: &str, image_url: &str) -> Vec<String> {
    let mut errors = Vec::new();
    check_range(&mut errors, "Title", title, 1, MAX_TITLE_LEN);
    check_range(&mut errors, "Description", description, 1, MAX_DESCRIPTION_LEN);
    if image_url.is_empty() {
        errors.push("Artwork URL must contain a link to an image.".to_string());
    }
    errors
}

/// Violations for a public comment submission.
pub fn comment_create_errors(name: &str, comment: &str) -> Vec<String> {
    let mut errors = Vec::new();
    check_range(&mut errors, "Name", name, 1, MAX_NAME_LEN);
    check_range(&mut errors, "Comment", comment, 1, MAX_COMMENT_LEN);
    errors
}

/// Violations for an admin comment update. The reply becomes required here:
/// updating a comment is how the admin publishes their reply.
pub fn comment_update_errors(name: &str, comment: &str, reply: &str) -> Vec<String> {
    let mut errors = Vec::new();
    check_range(&mut errors, "Name", name, 1, MAX_NAME_LEN);
    check_range(&mut errors, "Comment", comment, 1, MAX_COMMENT_LEN);
    check_range(&mut errors, "Reply", reply, 1, MAX_REPLY_LEN);
    errors
}

/// Violations for a public FAQ question submission.
pub fn faq_ask_errors(question: &str) -> Vec<String> {
    let mut errors = Vec::new();
    check_range(
        &mut errors,
        "Question",
        question,
        MIN_QUESTION_LEN,
        MAX_QUESTION_LEN,
    );
    errors
}

/// Violations for an admin FAQ update. The answer becomes required here:
/// updating a question is how the admin publishes their answer.
pub fn faq_update_errors(question: &str, answer: &str) -> Vec<String> {
    let mut errors = Vec::new();
    check_range(
        &mut errors,
        "Question",
        question,
        MIN_QUESTION_LEN,
        MAX_QUESTION_LEN,
    );
    check_range(&mut errors, "Answer", answer, 1, MAX_ANSWER_LEN);
    errors
}
