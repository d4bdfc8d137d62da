//! Error types for the GeoIP server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Geo Error Enum ==
/// Unified error type for the GeoIP server.
///
/// Per-request lookup problems never show up here; they become `Error`
/// fields in the response payload instead.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Configuration value is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Database could not be opened or read
    #[error("Database error: {0}")]
    Database(#[from] maxminddb::MaxMindDBError),

    /// Response payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for GeoError {
    fn into_response(self) -> Response {
        let status = match &self {
            GeoError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GeoError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            GeoError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("request failed: {}", self);

        let body = Json(json!({
            "Error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the GeoIP server.
pub type Result<T> = std::result::Result<T, GeoError>;
