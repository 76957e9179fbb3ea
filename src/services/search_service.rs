//! Servicio de búsqueda
//!
//! Este módulo implementa el pipeline de filtros sobre el inventario:
//! ubicación, categoría, precio, rating y disponibilidad, en ese orden,
//! con short-circuit por vehículo. El orden de enumeración del inventario
//! se preserva tal cual; no se re-ordena.

use std::sync::Arc;

use crate::dto::search_dto::{ResultCard, SearchResponse};
use crate::models::search::{AvailabilityMode, SearchQuery};
use crate::repositories::inventory_repository::VehicleInventory;
use crate::services::availability::is_available;
use crate::services::pagination::paginate;
use crate::utils::validation::normalize_text;

/// Pipeline de búsqueda sobre una fuente de inventario de solo lectura
pub struct SearchService {
    inventory: Arc<dyn VehicleInventory>,
}

impl SearchService {
    pub fn new(inventory: Arc<dyn VehicleInventory>) -> Self {
        Self { inventory }
    }

    /// Ejecutar el pipeline completo: filtros + disponibilidad + paginación
    pub fn search(&self, query: &SearchQuery) -> SearchResponse {
        let cards = self.filter(query);
        let (results, meta) = paginate(cards, query.page, query.per_page);
        SearchResponse { meta, results }
    }

    /// Lista completa (sin paginar) de result cards que matchean el query
    fn filter(&self, query: &SearchQuery) -> Vec<ResultCard> {
        let mut results = Vec::new();
        for vehicle in self.inventory.vehicles() {
            // ubicación: substring sobre la forma normalizada
            if !query.location.is_empty()
                && !normalize_text(&vehicle.location).contains(&query.location)
            {
                continue;
            }

            // categoría: membership exacta en el set
            if !query.categories.is_empty() && !query.categories.contains(&vehicle.category) {
                continue;
            }

            if let Some(price_max) = query.price_max {
                if vehicle.price_per_day > price_max {
                    continue;
                }
            }
            if let Some(rating_min) = query.rating_min {
                if vehicle.rating < rating_min {
                    continue;
                }
            }

            // La disponibilidad se calcula una sola vez y anota la card
            // aunque el modo sea All
            let is_free = is_available(vehicle, &query.requested);
            if query.availability == AvailabilityMode::Available && !is_free {
                continue;
            }

            results.push(ResultCard::from_vehicle(vehicle, is_free));
        }
        results
    }
}
