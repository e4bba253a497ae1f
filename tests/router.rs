mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use short_links::routes::app_router;
use tower::ServiceExt;

fn origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_shorten_then_redirect_through_router() {
    let (state, _store, _rx) = common::create_test_state();
    let app = app_router(state, &origins());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/shorten")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"url":"https://example.com/landing","custom_path":"landing"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["short_url"], "landing");

    let response = app
        .oneshot(Request::get("/landing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, store, _rx) = common::create_test_state();
    common::create_test_link(&store, "slash123", "https://example.com").await;
    let app = app_router(state, &origins());

    let response = app
        .oneshot(Request::get("/slash123/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_reserved_paths_are_not_codes() {
    let (state, _store, _rx) = common::create_test_state();
    let app = app_router(state, &origins());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let (state, _store, _rx) = common::create_test_state();
    let app = app_router(state, &origins());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/shorten")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_cors_unknown_origin_gets_no_allow_header() {
    let (state, _store, _rx) = common::create_test_state();
    let app = app_router(state, &origins());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/shorten")
                .header(header::ORIGIN, "https://evil.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_control_character_url_never_becomes_a_broken_redirect() {
    let (state, store, _rx) = common::create_test_state();
    let app = app_router(state, &origins());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/shorten")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"url":"https://example.com/a\u0001b","custom_path":"ctrl1"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
    assert!(store.is_empty());

    let response = app
        .oneshot(Request::get("/ctrl1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
