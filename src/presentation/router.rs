use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, ingest_handler, media_handler, pipeline_handler, render_handler,
    story_handler, voiceover_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = usize::try_from(state.settings.storage.max_upload_bytes).unwrap_or(usize::MAX);

    let api = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/ingest",
            post(ingest_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/story", post(story_handler))
        .route("/voiceover", post(voiceover_handler))
        .route("/render", post(render_handler))
        .route("/pipeline", post(pipeline_handler))
        .route("/media/local", get(media_handler));

    let prefix = state.settings.server.api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        api
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, api)
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
