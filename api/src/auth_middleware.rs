use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

use crate::{error::ApiError, state::AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Access gate for the `/api` routes: requests must carry the shared secret
/// in `X-API-KEY`. Missing and mismatched keys get the same response, and
/// nothing downstream runs for rejected requests.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(provided) = provided else {
        tracing::debug!("request rejected: missing {API_KEY_HEADER} header");
        return ApiError::unauthorized().into_response();
    };

    if !secrets_match(provided, &state.config.api_secret_key) {
        tracing::debug!("request rejected: {API_KEY_HEADER} mismatch");
        return ApiError::unauthorized().into_response();
    }

    next.run(request).await
}

/// Constant-time comparison: both sides are hashed and the digests compared
/// in full, so the cost does not depend on where the inputs differ.
fn secrets_match(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    provided
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
