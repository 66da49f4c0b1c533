use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use adoptify::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_incoming_request_id_when_handling_then_it_is_echoed() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), b"req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_one_is_generated() {
    let response = app()
        .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[test]
fn given_oversized_or_unprintable_id_when_reading_headers_then_fresh_id_is_minted() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, "x".repeat(200).parse().unwrap());
    let long = RequestId::from_headers(&headers);

    headers.insert(REQUEST_ID_HEADER, "has space".parse().unwrap());
    let spaced = RequestId::from_headers(&headers);

    assert!(uuid::Uuid::parse_str(long.as_str()).is_ok());
    assert!(uuid::Uuid::parse_str(spaced.as_str()).is_ok());
}
