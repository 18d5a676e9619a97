use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::response::ApiErrorResponse;
use shared::validation::ErrorReport;

/// Handler-level error carrying the HTTP status and the error envelope.
/// Error responses are always JSON; only success responses honor the
/// `format` query.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    errors: Option<ErrorReport>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized access")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 422 with the per-field translated report.
    pub fn validation(report: ErrorReport) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Validation Failed".to_string(),
            errors: Some(report),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = ApiErrorResponse::new(self.message, self.errors);
        (self.status, Json(payload)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Last-resort fault boundary for the catch-panic layer: logs the panic
/// detail and returns the opaque 500 envelope.
pub fn recover_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "request handler panicked");
    ApiError::internal("Internal Server Error").into_response()
}
