use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ContentStoreError;
use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn pipeline_error_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Storyboard(_) | PipelineError::Voice(_) => StatusCode::BAD_GATEWAY,
        PipelineError::AudioFetch(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Storage(ContentStoreError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
        PipelineError::Render(_) | PipelineError::Mux(_) | PipelineError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = pipeline_error_status(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Pipeline request failed");
        } else {
            tracing::warn!(error = %self, "Pipeline request rejected");
        }
        error_response(status, self.to_string())
    }
}
