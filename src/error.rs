//! HTTP boundary errors
//!
//! [`AppError`] is the only error type handlers return. Its `IntoResponse`
//! impl is the boundary translator:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `Validation` | 400 | `{ "errores": [ ... ] }` |
//! | `NotFound` | 404 | `{ "message": "..." }` |
//! | `Internal` | 500 | `{ "message": "Error interno del servidor" }` |
//!
//! Every error is logged before the response is built. Clients only see the
//! short message, never the internal detail.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::api::validation::FieldError;
use crate::application::ServiceError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request validation failed: {} rule(s) violated", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    /// Detail is logged, never sent to the client. Raised for handler panics.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ValidationBody {
    errores: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::ProductNotFound { message, .. } => Self::NotFound(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errores) => {
                tracing::warn!(?errores, "Request validation failed");
                (status, Json(ValidationBody { errores })).into_response()
            }
            Self::NotFound(message) => {
                tracing::warn!(%message, "Resource not found");
                (status, Json(MessageBody { message })).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(%detail, "Internal server error");
                let message = INTERNAL_ERROR_MESSAGE.to_string();
                (status, Json(MessageBody { message })).into_response()
            }
        }
    }
}

/// Catch-all for panics inside handlers, wired through `CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation(Vec::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_service_not_found_maps_to_404() {
        let err: AppError = ServiceError::ProductNotFound {
            id: "99".into(),
            message: "Producto con id 99 no encontrado".into(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Producto con id 99 no encontrado");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response = AppError::Internal("disk on fire".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_payloads() {
        assert_eq!(
            handle_panic(Box::new("static str")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            handle_panic(Box::new(String::from("owned"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            handle_panic(Box::new(42_u8)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_panic_body_is_generic_message() {
        use http_body_util::BodyExt;

        let response = handle_panic(Box::new("index out of bounds"));
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }));
    }
}
