//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the `{code, msg, data}` response envelope. The `AppError`
//! enum is the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Corrupt persisted data or other unexpected internal state.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Multi-step writes have already been rolled back when this surfaces.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was not valid JSON for the expected shape.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be deserialized.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Path parameter could not be deserialized.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message. Raised before any
    /// storage access takes place.
    #[error("{0}")]
    BadRequest(String),

    /// Server-side failure of a named operation.
    ///
    /// Results in 500 Internal Server Error whose message names the operation; the
    /// underlying error is logged server-side.
    #[error("{context}: {source}")]
    Operation {
        /// Client-facing description of the failed operation, e.g. "Failed to send message"
        context: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches the failed operation to server-side errors.
    ///
    /// Client errors (validation, not found, extractor rejections) are returned
    /// unchanged so their own status and message reach the client.
    pub fn context(self, context: &'static str) -> Self {
        match self {
            Self::BadRequest(_)
            | Self::NotFound(_)
            | Self::JsonRejection(_)
            | Self::QueryRejection(_)
            | Self::PathRejection(_)
            | Self::Operation { .. } => self,
            err => Self::Operation {
                context,
                source: Box::new(err),
            },
        }
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// The envelope `code` mirrors the HTTP status so clients that only inspect the body
/// still see the failure class.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and extractor rejections
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `Operation`, with the operation as message
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, msg),
            Self::JsonRejection(rejection) => failure(StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::QueryRejection(rejection) => failure(StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::PathRejection(rejection) => failure(StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::NotFound(msg) => failure(StatusCode::NOT_FOUND, msg),
            Self::Operation { context, source } => {
                tracing::error!("{}: {}", context, source);
                failure(StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn failure(status: StatusCode, msg: String) -> Response {
    (
        status,
        Json(ApiResponse::<()>::failure(status.as_u16() as i32, msg)),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
