//! Typed error handling for the API.
//!
//! Four error classes are visible to clients (malformed identifier,
//! missing document, failed creation read-back and payload validation)
//! plus the undifferentiated database failure. Each maps to exactly one
//! HTTP status and a `{"detail": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// All errors a handler can surface.
///
/// The `&'static str` payloads are the per-entity messages owned by the
/// [`crate::entities::Resource`] implementations, so the same generic
/// handler produces `"Fornecedor não encontrado"` or
/// `"Roupa não encontrada"` depending on the resource it serves.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path identifier is not a well-formed ObjectId. Raised before
    /// any database call.
    #[error("ID inválido")]
    InvalidId,

    /// A targeted operation matched no document.
    #[error("{0}")]
    NotFound(&'static str),

    /// The read-back after an insert returned nothing.
    #[error("{0}")]
    CreationFailed(&'static str),

    /// The request payload failed the field-level contract. Raised at
    /// deserialization, before any database call.
    #[error("{0}")]
    Validation(String),

    /// Any failure inside the driver or the server. Propagated as-is,
    /// no retry.
    #[error("erro no banco de dados: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::CreationFailed(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body shape shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref source) = self {
            tracing::error!(error = %source, "database failure");
        }

        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
