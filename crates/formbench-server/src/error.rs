//! HTTP mapping for the shared error type.
//!
//! Handlers return `Result<_, HttpError>`; this module turns the stable
//! client codes into HTTP statuses and a JSON error body. No error here ever
//! escalates past the request boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use formbench_core::error::{ClientCode, FormbenchError};

/// Handler result alias.
pub type HandlerResult<T> = std::result::Result<T, HttpError>;

/// Wrapper so `FormbenchError` renders as an HTTP response.
#[derive(Debug)]
pub struct HttpError(pub FormbenchError);

impl From<FormbenchError> for HttpError {
    fn from(e: FormbenchError) -> Self {
        Self(e)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::MalformedRequest => StatusCode::BAD_REQUEST,
        ClientCode::LogWriteFailure | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        // Startup-only codes; a handler should never produce these.
        ClientCode::BadConfig | ClientCode::UnsupportedVersion => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        tracing::warn!(code = code.as_str(), error = %self.0, "request failed");
        (
            status,
            Json(json!({ "error": code.as_str(), "message": self.0.to_string() })),
        )
            .into_response()
    }
}
