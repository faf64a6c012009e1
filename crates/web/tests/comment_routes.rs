//! HTTP-level tests for the comment routes.

mod common;

use atelier_db::models::comment::NewComment;
use atelier_db::repositories::CommentRepo;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_string, get, login_as_admin, post_form};
use sqlx::SqlitePool;

async fn seed_comment(pool: &SqlitePool) -> i64 {
    let input = NewComment {
        name: "Ada".to_string(),
        comment: "Lovely brushwork!".to_string(),
    };
    CommentRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_visitor_can_post_comment(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        &app,
        "/createComment",
        &[("name", "Ada"), ("comment", "Lovely brushwork!")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/comments");

    let comments = CommentRepo::list(&pool).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].name, "Ada");
    assert!(comments[0].reply.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_cannot_post_comment(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login_as_admin(&app).await;

    // Fields are perfectly valid; the inverted gate still rejects.
    let response = post_form(
        &app,
        "/createComment",
        &[("name", "Ada"), ("comment", "Lovely brushwork!")],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("You cannot post a comment as an admin."));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_with_empty_fields_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        &app,
        "/createComment",
        &[("name", ""), ("comment", "")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Name must contain at least 1 character."));
    assert!(body.contains("Comment must contain at least 1 character."));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_update_sets_reply(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;
    let cookie = login_as_admin(&app).await;

    let response = post_form(
        &app,
        &format!("/updateComments/{id}"),
        &[
            ("name", "Ada"),
            ("comment", "Lovely brushwork!"),
            ("reply", "Thank you!"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/comments");

    let comment = CommentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(comment.reply.as_deref(), Some("Thank you!"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_without_reply_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;
    let cookie = login_as_admin(&app).await;

    let response = post_form(
        &app,
        &format!("/updateComments/{id}"),
        &[
            ("name", "Ada"),
            ("comment", "Lovely brushwork!"),
            ("reply", ""),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Reply must contain at least 1 character."));

    let comment = CommentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(comment.reply.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_while_unauthenticated_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;

    let response = post_form(
        &app,
        &format!("/updateComments/{id}"),
        &[
            ("name", "Ada"),
            ("comment", "Lovely brushwork!"),
            ("reply", "Thank you!"),
        ],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("You have to be logged in to update a comment."));

    let comment = CommentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(comment.reply.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_list_shows_reply(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;
    let cookie = login_as_admin(&app).await;
    post_form(
        &app,
        &format!("/updateComments/{id}"),
        &[
            ("name", "Ada"),
            ("comment", "Lovely brushwork!"),
            ("reply", "Thank you!"),
        ],
        Some(&cookie),
    )
    .await;

    let response = get(&app, "/comments", None).await;
    let body = body_string(response).await;
    assert!(body.contains("Lovely brushwork!"));
    assert!(body.contains("Thank you!"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_delete_is_idempotent(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;
    let cookie = login_as_admin(&app).await;

    let response = post_form(&app, &format!("/deleteComment/{id}"), &[], Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());

    let response = post_form(&app, &format!("/deleteComment/{id}"), &[], Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_while_unauthenticated_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = seed_comment(&pool).await;

    let response = post_form(&app, &format!("/deleteComment/{id}"), &[], None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(CommentRepo::list(&pool).await.unwrap().len(), 1);
}
