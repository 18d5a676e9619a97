use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::response::{render, ApiSuccessResponse, ResponseFormat};

use crate::error::{ApiError, ApiResult};

/// Builds a success response in the caller-selected format, mapping render
/// failures to the opaque 500.
pub fn success<T: Serialize>(
    status: StatusCode,
    format: ResponseFormat,
    message: &str,
    data: Option<T>,
) -> ApiResult<Response> {
    let envelope = ApiSuccessResponse::new(message, data);
    let (body, content_type) = render(format, &envelope).map_err(|err| {
        tracing::error!(error = %err, "response serialization failed");
        ApiError::internal("Internal Server Error")
    })?;
    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
