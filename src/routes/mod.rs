//! Rutas de la API
//!
//! Este módulo contiene los routers de la API.

pub mod search_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/api", search_routes::create_search_router())
}
