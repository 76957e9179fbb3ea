//! Booking Search - servicio de búsqueda de vehículos de alquiler
//!
//! Pipeline puro de request/response: query cruda → normalización →
//! filtros (consultando disponibilidad por vehículo) → paginación →
//! payload de respuesta.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo de la aplicación con middleware
pub fn build_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    routes::create_api_router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
