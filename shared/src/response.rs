//! Response envelopes and format-aware serialization.
//!
//! Every payload leaves the service wrapped in a success or error envelope.
//! The success path can render in JSON, XML or YAML, selected by the `format`
//! query token; unknown tokens fall back to JSON rather than erroring.

use serde::Serialize;
use thiserror::Error;

use crate::validation::ErrorReport;

/// Envelope for successful responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccessResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiSuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Envelope for error responses. `errors` carries the per-field report on
/// validation failures and is omitted otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorReport>,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>, errors: Option<ErrorReport>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}

/// Serialization format selected by the `format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
    Yaml,
}

impl ResponseFormat {
    /// Exact-match token lookup; anything unrecognized is the JSON default.
    pub fn from_token(token: &str) -> Self {
        match token {
            "xml" => ResponseFormat::Xml,
            "yaml" | "yml" => ResponseFormat::Yaml,
            _ => ResponseFormat::Json,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
            ResponseFormat::Yaml => "application/x-yaml",
        }
    }
}

/// Failure while serializing an envelope into the selected format.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("xml serialization failed: {0}")]
    Xml(String),
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serializes `payload` in the requested format, returning the body bytes
/// and the matching content type.
pub fn render<T: Serialize>(
    format: ResponseFormat,
    payload: &T,
) -> Result<(Vec<u8>, &'static str), RenderError> {
    let body = match format {
        ResponseFormat::Json => serde_json::to_vec(payload)?,
        ResponseFormat::Xml => quick_xml::se::to_string(payload)
            .map_err(|err| RenderError::Xml(err.to_string()))?
            .into_bytes(),
        ResponseFormat::Yaml => serde_yaml::to_string(payload)?.into_bytes(),
    };
    Ok((body, format.content_type()))
}
