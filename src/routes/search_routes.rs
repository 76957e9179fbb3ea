//! Rutas de búsqueda
//!
//! Este módulo contiene los handlers de `GET /search` y `GET /health`.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::dto::search_dto::{RawSearchParams, SearchResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_search_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search))
        .route("/health", get(health))
}

/// GET /api/search
///
/// La query string se extrae como pares clave/valor para conservar
/// parámetros repetidos (`?type=SUV&type=Sedan`).
async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<SearchResponse>> {
    let query = RawSearchParams::from_pairs(pairs).into_query()?;
    tracing::debug!(?query, "ejecutando búsqueda");

    let response = state.search_service().search(&query);
    Ok(Json(response))
}

/// GET /api/health - liveness marker, sin lógica de negocio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "service": "booking-search"
    }))
}
