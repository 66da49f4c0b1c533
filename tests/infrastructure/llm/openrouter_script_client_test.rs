use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use adoptify::application::ports::{ProviderError, ScriptClient};
use adoptify::domain::PetProfile;
use adoptify::infrastructure::llm::OpenRouterScriptClient;

use crate::helpers::closed_port;

const API_KEY: &str = "test-key";

async fn chat(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {API_KEY}"));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
    }

    let model = body["model"].as_str().unwrap_or_default().to_string();
    let reply = match model.as_str() {
        "limited" => return (StatusCode::TOO_MANY_REQUESTS, Json(json!({}))),
        "broken" => return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))),
        "empty" => json!({ "choices": [] }),
        "no-usage" => json!({ "choices": [{ "message": { "content": "no usage" } }] }),
        _ => json!({
            "choices": [{ "message": { "content": format!("script from {model}") } }],
            "usage": { "total_cost": 0.0123 }
        }),
    };
    (StatusCode::OK, Json(reply))
}

async fn serve_gateway() -> String {
    let app = Router::new().route("/chat/completions", post(chat));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn profile() -> PetProfile {
    PetProfile::new("Luna", "Shy at first", vec!["gentle".to_string()])
}

#[tokio::test]
async fn given_successful_reply_when_completing_then_content_and_reported_cost() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new(API_KEY.to_string(), base, 5).unwrap();

    let completion = client.complete_script("good", &profile()).await.unwrap();

    assert_eq!(completion.content, "script from good");
    assert_eq!(completion.cost_usd, 0.0123);
}

#[tokio::test]
async fn given_reply_without_usage_when_completing_then_fallback_cost() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new(API_KEY.to_string(), base, 5).unwrap();

    let completion = client.complete_script("no-usage", &profile()).await.unwrap();

    assert_eq!(completion.content, "no usage");
    assert_eq!(completion.cost_usd, 0.001);
}

#[tokio::test]
async fn given_429_when_completing_then_rate_limited() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new(API_KEY.to_string(), base, 5).unwrap();

    let result = client.complete_script("limited", &profile()).await;

    assert!(matches!(result, Err(ProviderError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_completing_then_request_failed_with_status() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new(API_KEY.to_string(), base, 5).unwrap();

    let result = client.complete_script("broken", &profile()).await;

    match result {
        Err(ProviderError::ApiRequestFailed(message)) => assert!(message.contains("500")),
        other => panic!("expected request failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_wrong_key_when_completing_then_request_failed() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new("other".to_string(), base, 5).unwrap();

    let result = client.complete_script("good", &profile()).await;

    assert!(matches!(result, Err(ProviderError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_no_choices_when_completing_then_invalid_response() {
    let base = serve_gateway().await;
    let client = OpenRouterScriptClient::new(API_KEY.to_string(), base, 5).unwrap();

    let result = client.complete_script("empty", &profile()).await;

    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_unreachable_gateway_when_completing_then_request_failed() {
    let port = closed_port().await;
    let client =
        OpenRouterScriptClient::new(API_KEY.to_string(), format!("http://127.0.0.1:{port}"), 2).unwrap();

    let result = client.complete_script("good", &profile()).await;

    assert!(matches!(result, Err(ProviderError::ApiRequestFailed(_))));
}
