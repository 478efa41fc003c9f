use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use handlebars::html_escape;
use thiserror::Error;

use fca_core::error::{DomainError, StoreError};
use fca_core::spreadsheet::SpreadsheetError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation(constraint) => {
                ApiError::Conflict(format!("A record with the same key already exists ({})", constraint))
            }
            StoreError::Database(msg) => ApiError::DatabaseError(msg),
            StoreError::Closed => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CampaignNotFound(_) | DomainError::LookupNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::Store(store) => store.into(),
        }
    }
}

impl From<SpreadsheetError> for ApiError {
    fn from(e: SpreadsheetError) -> Self {
        match e {
            SpreadsheetError::Write(_) => ApiError::InternalError(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(e: handlebars::RenderError) -> Self {
        ApiError::InternalError(format!("Failed to render page: {}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad Request", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "Conflict", msg)
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!("Payload too large: {}", msg);
                (StatusCode::PAYLOAD_TOO_LARGE, "Upload Too Large", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database Error", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", msg)
            }
        };

        let body = format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
             <body><h1>{title}</h1><p>{}</p><p><a href=\"/\">Back to console</a></p></body></html>",
            html_escape(&message)
        );

        (status, Html(body)).into_response()
    }
}
