//! Integration tests for the HTTP endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), no TCP binding needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use visual_math::server::{create_router, AppState, RENDER_FAILURE_MESSAGE};

fn app() -> axum::Router {
    create_router(Arc::new(AppState::default()))
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

fn generate_request(form: &str) -> Request<Body> {
    Request::post("/generate")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

// ── GET / ────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_serves_form() {
    let resp = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ctype = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(ctype.starts_with("text/html"), "content-type={ctype}");

    let html = String::from_utf8(body_bytes(resp.into_body()).await).unwrap();
    assert!(html.contains(r#"action="/generate""#));
    assert!(html.contains(r#"name="operation""#));
    assert!(html.contains(r#"name="page_count""#));
    assert!(html.contains(r#"<option value="-">"#));
    assert!(html.contains(r#"<option value="2">"#));
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes(resp.into_body()).await).unwrap();
    assert_eq!(json["status"], "OK");
}

// ── POST /generate ───────────────────────────────────────────────────

#[tokio::test]
async fn generate_addition_one_page() {
    let resp = app().oneshot(generate_request("operation=%2B&page_count=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=visual_math_sheet.pdf"
    );
    let bytes = body_bytes(resp.into_body()).await;
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn generate_subtraction_two_pages() {
    let resp = app().oneshot(generate_request("operation=-&page_count=2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp.into_body()).await;
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn generate_defaults_to_one_page() {
    let resp = app().oneshot(generate_request("operation=-")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_missing_operation() {
    let resp = app().oneshot(generate_request("page_count=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = String::from_utf8(body_bytes(resp.into_body()).await).unwrap();
    assert!(text.contains("operation"), "body={text}");
}

#[tokio::test]
async fn generate_invalid_operation() {
    let resp = app().oneshot(generate_request("operation=*&page_count=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_invalid_page_count() {
    for form in ["operation=%2B&page_count=3", "operation=%2B&page_count=abc"] {
        let resp = app().oneshot(generate_request(form)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "form={form}");
        let text = String::from_utf8(body_bytes(resp.into_body()).await).unwrap();
        assert!(text.contains("page_count"), "body={text}");
        assert_ne!(text, RENDER_FAILURE_MESSAGE);
    }
}

#[tokio::test]
async fn generate_rejects_get() {
    let resp = app()
        .oneshot(Request::get("/generate").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
