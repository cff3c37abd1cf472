#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use trivia_endpoint::{bank::QuestionBank, router, AppState};

pub const STATIC_EMAIL: &str = "richmann@goyette.com";
pub const TOTAL_QUESTIONS: usize = 5;
pub const ANSWERS: [&str; TOTAL_QUESTIONS] = [
    "To test the bartender's skills",
    "42",
    "true",
    "Because they didn't receive the 'float' property!",
    "false",
];

/// A router over the built-in bank with `STATIC_EMAIL` already logged in.
pub async fn create_test_app() -> Router {
    let state = AppState::new(QuestionBank::default());
    state
        .quiz
        .preregister(&[STATIC_EMAIL.to_string()])
        .await
        .expect("preregister static email");
    router(state)
}

pub fn encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
    )
}

/// POST the parameters as a form-encoded body.
pub async fn post_form(app: &Router, pairs: &[(&str, &str)]) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode(pairs)))
        .expect("request build should succeed");
    send(app, req).await
}

/// POST an already encoded form body as-is.
pub async fn post_raw(app: &Router, body: &'static str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request build should succeed");
    send(app, req).await
}

/// POST the parameters on the query string with an empty form body.
pub async fn post_query(app: &Router, pairs: &[(&str, &str)]) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(format!("/?{}", encode(pairs)))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::empty())
        .expect("request build should succeed");
    send(app, req).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    send(app, req).await
}

pub async fn login(app: &Router, email: &str) -> (StatusCode, String) {
    post_form(app, &[("email", email), ("action", "login")]).await
}

pub async fn question(app: &Router, email: &str) -> (StatusCode, String) {
    post_form(app, &[("email", email), ("action", "question")]).await
}

pub async fn answer(
    app: &Router,
    email: &str,
    question_id: &str,
    answer: &str,
) -> (StatusCode, String) {
    post_form(
        app,
        &[
            ("email", email),
            ("action", "answer"),
            ("question_id", question_id),
            ("answer", answer),
        ],
    )
    .await
}

pub async fn score(app: &Router, email: &str) -> (StatusCode, String) {
    post_form(app, &[("email", email), ("action", "score")]).await
}

pub async fn reset(app: &Router, email: &str) -> (StatusCode, String) {
    post_form(app, &[("email", email), ("action", "reset")]).await
}

pub fn question_id(body: &str) -> Option<usize> {
    body.lines()
        .find_map(|line| line.strip_prefix("Id:"))
        .and_then(|id| id.trim().parse().ok())
}
