//! Posts API integration tests
//!
//! Creation through the form endpoint, and owner-only deletion.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;
use neighborly::shared::Post;

async fn posts(server: &axum_test::TestServer) -> Vec<Post> {
    let response = server.get("/posts/view").await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_create_post_redirects_with_flash() {
    let state = test_state().await;
    let server = test_server(state.clone());
    let token = register_and_login(&server, "X", "x@x.com").await;
    let author = state.store.find_user_by_email("x@x.com").await.unwrap().unwrap();

    let response = server
        .post("/posts")
        .authorization_bearer(&token)
        .form(&[("content", "Lost cat near the bakery")])
        .await;
    assert_flash(&response, "success", "Post created successfully!");

    let listed = posts(&server).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "Lost cat near the bakery");
    assert_eq!(listed[0].created_by_id, author.id);
}

#[tokio::test]
async fn test_create_post_without_content() {
    let server = test_server(test_state().await);
    let token = register_and_login(&server, "X", "x@x.com").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&token)
        .form(&[("content", "")])
        .await;
    assert_flash(&response, "danger", "Post content is required.");
    assert!(posts(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let server = test_server(test_state().await);

    let response = server
        .post("/posts")
        .form(&[("content", "Hello")])
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(posts(&server).await.is_empty());
}

#[tokio::test]
async fn test_only_the_author_can_delete() {
    let server = test_server(test_state().await);
    let x = register_and_login(&server, "X", "x@x.com").await;
    let y = register_and_login(&server, "Y", "y@x.com").await;

    server
        .post("/posts")
        .authorization_bearer(&x)
        .form(&[("content", "Garage sale on Saturday")])
        .await;
    let post_id = posts(&server).await[0].id;
    let delete_path = format!("/posts/{}/delete", post_id);

    let response = server.post(&delete_path).authorization_bearer(&y).await;
    assert_flash(&response, "danger", "You are not authorized to delete this post.");
    assert_eq!(posts(&server).await.len(), 1);

    let response = server.post(&delete_path).authorization_bearer(&x).await;
    assert_flash(&response, "success", "Post deleted successfully!");
    assert!(posts(&server).await.is_empty());

    let response = server.post(&delete_path).authorization_bearer(&x).await;
    assert_flash(&response, "danger", "Post not found.");
}

#[tokio::test]
async fn test_delete_requires_token() {
    let server = test_server(test_state().await);
    let x = register_and_login(&server, "X", "x@x.com").await;

    server
        .post("/posts")
        .authorization_bearer(&x)
        .form(&[("content", "Hello")])
        .await;
    let post_id = posts(&server).await[0].id;

    let response = server.post(&format!("/posts/{}/delete", post_id)).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(posts(&server).await.len(), 1);
}

#[tokio::test]
async fn test_posts_are_listed_newest_first() {
    let server = test_server(test_state().await);
    let token = register_and_login(&server, "X", "x@x.com").await;

    for content in ["one", "two", "three"] {
        server
            .post("/posts")
            .authorization_bearer(&token)
            .form(&[("content", content)])
            .await;
    }

    let contents: Vec<String> = posts(&server)
        .await
        .into_iter()
        .map(|post| post.content)
        .collect();
    assert_eq!(contents, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_create_post_with_json_body() {
    let server = test_server(test_state().await);
    let token = register_and_login(&server, "X", "x@x.com").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&json!({ "content": "Hello" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid request data", "status": 400 })
    );
    assert!(posts(&server).await.is_empty());
}

#[tokio::test]
async fn test_delete_with_non_numeric_id() {
    let server = test_server(test_state().await);
    let token = register_and_login(&server, "X", "x@x.com").await;

    let response = server.post("/posts/abc/delete").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid path parameter", "status": 400 })
    );
}
