//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests del frontend desde otros orígenes.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Crear middleware de CORS.
///
/// Sin orígenes configurados se permite cualquier origen - modo desarrollo.
/// Con orígenes, solo esa lista, limitada a los métodos del API de búsqueda.
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let mut cors = CorsLayer::new();
    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([Method::GET, Method::OPTIONS]).allow_headers([
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
    ])
}
