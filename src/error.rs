//! Error types for configuration, token exchange and playlist validation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{types::ValidationResult, warning};

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Failures while obtaining an app access token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token endpoint could not be reached or its body could not be read.
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("token endpoint responded with {0}")]
    Rejected(reqwest::StatusCode),

    /// The token endpoint answered without an `access_token`.
    #[error("token response carried no access_token")]
    MissingAccessToken,
}

/// Terminal outcome of a failed validation.
///
/// The `Display` text is exactly what the caller sees in the `error` field.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid Spotify playlist URL format")]
    InvalidUrl,

    #[error("Playlist not found or is private")]
    NotFound,

    /// Upstream refused access. The reason is logged, never returned.
    #[error("Unable to access playlist")]
    Inaccessible(String),

    /// Anything unexpected along the way. The source is logged, never returned.
    #[error("Server error during validation")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ValidationError {
    /// HTTP status used for this outcome.
    ///
    /// Upstream refusals are a valid answer to the question "is this playlist
    /// usable", so they travel with `200 OK`.
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationError::InvalidUrl => StatusCode::BAD_REQUEST,
            ValidationError::NotFound | ValidationError::Inaccessible(_) => StatusCode::OK,
            ValidationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `{ "valid": false, "error": ... }` body for this outcome.
    pub fn to_result(&self) -> ValidationResult {
        ValidationResult::invalid(self.to_string())
    }
}

impl From<reqwest::Error> for ValidationError {
    fn from(e: reqwest::Error) -> Self {
        ValidationError::Internal(Box::new(e))
    }
}

impl From<TokenError> for ValidationError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Request(e) => ValidationError::Internal(Box::new(e)),
            other => ValidationError::Inaccessible(other.to_string()),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        match &self {
            ValidationError::Internal(source) => {
                warning!("Validation error: {}", error_chain(source.as_ref()))
            }
            ValidationError::Inaccessible(reason) => warning!("Playlist inaccessible: {}", reason),
            _ => {}
        }

        (self.status(), Json(self.to_result())).into_response()
    }
}

/// Joins an error and all of its sources into one line.
pub fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
