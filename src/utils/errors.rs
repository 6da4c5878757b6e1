//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la capa HTTP
//! y su conversión a respuestas JSON apropiadas. Los cálculos de
//! cotización nunca fallan: sólo la frontera HTTP produce errores.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Cuerpo JSON de todas las respuestas de error
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Código estable que el cliente puede comparar
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            AppError::Validation(errors) => {
                log::warn!("⚠️ Solicitud con datos incompletos: {}", errors);
                ErrorResponse {
                    error: "Validation Error",
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(errors)),
                    code,
                }
            }
            AppError::NotFound(msg) => {
                log::warn!("🔍 Recurso no encontrado: {}", msg);
                ErrorResponse {
                    error: "Not Found",
                    message: msg,
                    details: None,
                    code,
                }
            }
            AppError::BadRequest(msg) => {
                log::warn!("⚠️ Solicitud incorrecta: {}", msg);
                ErrorResponse {
                    error: "Bad Request",
                    message: msg,
                    details: None,
                    code,
                }
            }
            AppError::Internal(msg) => {
                log::error!("❌ Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error",
                    message: "An unexpected error occurred".to_string(),
                    details: None,
                    code,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
