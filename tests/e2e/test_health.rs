use crate::e2e::helpers;

use helpers::stub_engine::EngineMode;
use helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_return_ok_for_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn it_should_return_ready_when_the_synthesizer_is_available() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("synthesizer").and_then(|v| v.as_str()),
        Some("available")
    );
}

#[tokio::test]
async fn it_should_report_not_ready_without_a_synthesizer() {
    let ctx = TestContext::with_engine(EngineMode::Missing).await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("status").and_then(|v| v.as_str()),
        Some("not_ready")
    );
    assert_eq!(
        body.get("synthesizer").and_then(|v| v.as_str()),
        Some("unavailable")
    );
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_handle_concurrent_health_checks() {
    let ctx = TestContext::new().await.unwrap();

    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
