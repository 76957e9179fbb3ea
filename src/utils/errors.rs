//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error de la aplicación
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación.
///
/// El único error que llega al caller es `InvalidDateRange`; el resto de
/// las entradas se normalizan defensivamente en lugar de rechazarse.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidDateRange(msg) => {
                tracing::warn!("Invalid date range: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear el error de rango de fechas inválido
pub fn invalid_date_range_error() -> AppError {
    AppError::InvalidDateRange(
        "Invalid dates. Ensure pickupDate <= dropoffDate and format is YYYY-MM-DD.".to_string(),
    )
}
