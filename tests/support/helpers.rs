// tests/support/helpers.rs
use super::mocks::{DummyTokenManager, FixedClock, InMemoryBlog};
use axum::body;
use axum::http::StatusCode;
use quill_core::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use quill_core::domain::{
    comment::{CommentReadRepository, CommentWriteRepository},
    like::LikeRepository,
    post::PostRepository,
    user::UserRepository,
};
use quill_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// alice(1), bob(2) と投稿 1, 2 を持つストア
pub fn seeded_blog() -> Arc<InMemoryBlog> {
    let blog = Arc::new(InMemoryBlog::new());
    blog.add_user(1, "alice");
    blog.add_user(2, "bob");
    blog.add_post(1, "First post");
    blog.add_post(2, "Second post");
    blog
}

pub fn build_services(blog: &Arc<InMemoryBlog>) -> Arc<ApplicationServices> {
    let comment_write: Arc<dyn CommentWriteRepository> = blog.clone();
    let comment_read: Arc<dyn CommentReadRepository> = blog.clone();
    let likes: Arc<dyn LikeRepository> = blog.clone();
    let posts: Arc<dyn PostRepository> = blog.clone();
    let users: Arc<dyn UserRepository> = blog.clone();
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());

    Arc::new(ApplicationServices::new(
        comment_write,
        comment_read,
        likes,
        posts,
        users,
        token_manager,
        clock,
    ))
}

pub fn build_test_state(blog: &Arc<InMemoryBlog>) -> HttpState {
    HttpState {
        services: build_services(blog),
    }
}

/// Router over a freshly seeded store; the store is returned for assertions.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryBlog>) {
    let blog = seeded_blog();
    let router = build_router(build_test_state(&blog));
    (router, blog)
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
