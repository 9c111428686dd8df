use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use progress_core::error::ProgressError;

// ---------------------------------------------------------------------------
// Internal sentinels for explicit 400 / 404 errors
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 404 through the `anyhow::Error` chain.
#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

/// Carries an explicit HTTP 400 through the `anyhow::Error` chain.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }

    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<NotFoundError>().is_some() {
            return StatusCode::NOT_FOUND;
        }
        if self.0.downcast_ref::<BadRequestError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        match self.0.downcast_ref::<ProgressError>() {
            Some(e) => match e {
                ProgressError::DataFileNotFound(_) => StatusCode::NOT_FOUND,
                ProgressError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    StatusCode::NOT_FOUND
                }
                ProgressError::UnknownStatus(_)
                | ProgressError::InvalidPayload(_)
                | ProgressError::Json(_)
                | ProgressError::Yaml(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ProgressError::HttpStatus { .. } | ProgressError::Http(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ProgressError::Io(_)
                | ProgressError::InvalidConfig(_)
                | ProgressError::Template(_)
                | ProgressError::TemplateSyntax(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
