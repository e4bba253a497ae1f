mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use short_links::api::handlers::redirect_handler;
use short_links::domain::hit_worker::run_hit_worker;

fn redirect_app(state: short_links::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store, mut rx) = common::create_test_state();
    common::create_test_link(&store, "docs1234", "https://example.com/docs?page=2").await;
    let server = redirect_app(state);

    let response = server.get("/docs1234").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/docs?page=2"
    );
    assert_eq!(rx.try_recv().unwrap().code, "docs1234");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store, mut rx) = common::create_test_state();
    let server = redirect_app(state);

    let response = server.get("/unknown1").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Short link not found"
    );
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_malformed_code_is_not_found() {
    let (state, _store, _rx) = common::create_test_state();
    let server = redirect_app(state);

    for path in ["/ab", "/favicon.ico", "/has-dash", "/averyveryverylongcode"] {
        server.get(path).await.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_counts_hits() {
    let (state, store, rx) = common::create_test_state();
    common::create_test_link(&store, "count123", "https://example.com").await;
    tokio::spawn(run_hit_worker(rx, store.clone()));
    let server = redirect_app(state);

    for _ in 0..3 {
        server
            .get("/count123")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    assert_eq!(common::wait_for_hits(&store, "count123", 3).await, 3);
}

#[tokio::test]
async fn test_redirect_with_full_hit_queue_still_redirects() {
    let (state, store, _rx) = common::create_test_state_with_queue(1);
    common::create_test_link(&store, "busy1234", "https://example.com").await;
    let server = redirect_app(state);

    for _ in 0..5 {
        server
            .get("/busy1234")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }
}
