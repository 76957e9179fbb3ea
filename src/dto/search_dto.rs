//! DTOs de búsqueda
//!
//! Este módulo contiene los parámetros crudos de la query string, su
//! normalización al `SearchQuery` validado, y las formas de respuesta
//! (result card + metadata de paginación).

use serde::{Deserialize, Serialize};

use crate::models::search::{AvailabilityMode, AvailabilityStatus, SearchQuery};
use crate::models::vehicle::{DateRange, Vehicle, VehicleCategory};
use crate::utils::errors::{invalid_date_range_error, AppResult};
use crate::utils::validation::{normalize_text, parse_date};

/// Defaults de paginación del endpoint de búsqueda
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 12;
pub const MAX_PER_PAGE: usize = 50;

/// Parámetros crudos de `GET /api/search`, tal como llegan del boundary.
///
/// Se construyen desde los pares clave/valor de la query string para no
/// perder parámetros repetidos (`?type=SUV&type=Sedan`).
#[derive(Debug, Default)]
pub struct RawSearchParams {
    pub pickup_location: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    /// Valores del parámetro repetido `type`
    pub types: Vec<String>,
    /// Valor del parámetro `types` separado por comas
    pub types_csv: String,
    pub price_max: Option<String>,
    pub rating_min: Option<String>,
    pub availability: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl RawSearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = RawSearchParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "pickupLocation" => params.pickup_location = value.trim().to_string(),
                "pickupDate" => params.pickup_date = value.trim().to_string(),
                "dropoffDate" => params.dropoff_date = value.trim().to_string(),
                "type" => params.types.push(value),
                "types" => params.types_csv = value,
                "priceMax" => params.price_max = Some(value),
                "rating" => params.rating_min = Some(value),
                "availability" => params.availability = Some(value),
                "page" => params.page = Some(value),
                "per_page" => params.per_page = Some(value),
                // Parámetros desconocidos se ignoran
                _ => {}
            }
        }
        params
    }

    /// Normalizar y validar hacia un `SearchQuery`.
    ///
    /// Las fechas son lo único que se rechaza; todo lo demás se coerce:
    /// números que no parsean quedan ausentes, page/per_page se clampan.
    pub fn into_query(self) -> AppResult<SearchQuery> {
        let start = parse_date(&self.pickup_date);
        let end = parse_date(&self.dropoff_date);
        let requested = match (start, end) {
            (Some(start), Some(end)) if start <= end => DateRange::new(start, end),
            _ => return Err(invalid_date_range_error()),
        };

        // `type` repetido gana sobre `types` CSV; entradas vacías fuera
        let raw_types = if !self.types.is_empty() {
            self.types
        } else {
            self.types_csv.split(',').map(str::to_string).collect()
        };
        let categories = raw_types
            .into_iter()
            .filter(|t| !t.is_empty())
            .map(VehicleCategory::from)
            .collect();

        let price_max = self.price_max.and_then(|raw| raw.trim().parse::<i64>().ok());
        let rating_min = self.rating_min.and_then(|raw| raw.trim().parse::<f64>().ok());

        let availability = self
            .availability
            .as_deref()
            .map(AvailabilityMode::parse)
            .unwrap_or_default();

        let page = self
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE as i64)
            .max(DEFAULT_PAGE as i64) as usize;
        let per_page = self
            .per_page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PER_PAGE as i64)
            .clamp(1, MAX_PER_PAGE as i64) as usize;

        Ok(SearchQuery {
            location: normalize_text(&self.pickup_location),
            requested,
            categories,
            price_max,
            rating_min,
            availability,
            page,
            per_page,
        })
    }
}

/// Result card: proyección de un vehículo más su estado de disponibilidad
/// calculado para el rango solicitado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCard {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub location: String,
    pub rating: f64,
    #[serde(rename = "pricePerDay")]
    pub price_per_day: i64,
    pub image: String,
    pub features: Vec<String>,
    pub status: AvailabilityStatus,
}

impl ResultCard {
    pub fn from_vehicle(vehicle: &Vehicle, is_free: bool) -> Self {
        Self {
            id: vehicle.id.clone(),
            title: vehicle.title.clone(),
            category: vehicle.category.clone(),
            location: vehicle.location.clone(),
            // Rating con un decimal en el wire
            rating: (vehicle.rating * 10.0).round() / 10.0,
            price_per_day: vehicle.price_per_day,
            image: vehicle.image.clone(),
            features: vehicle.features.clone(),
            status: AvailabilityStatus::from_is_free(is_free),
        }
    }
}

/// Metadata de paginación de la respuesta
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMeta {
    pub count: usize,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub pages: usize,
}

/// Respuesta completa de `GET /api/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub meta: SearchMeta,
    pub results: Vec<ResultCard>,
}
