//! Modelo de búsqueda
//!
//! Este módulo contiene el query de búsqueda ya validado y los tipos
//! derivados de disponibilidad que anotan cada resultado.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::vehicle::{DateRange, VehicleCategory};

/// Modo de disponibilidad: todos los vehículos (anotados) o solo los libres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityMode {
    #[default]
    All,
    Available,
}

impl AvailabilityMode {
    /// Parseo tolerante: cualquier valor distinto de "available" es All
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("available") {
            AvailabilityMode::Available
        } else {
            AvailabilityMode::All
        }
    }
}

/// Estado de disponibilidad calculado para el rango solicitado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn from_is_free(is_free: bool) -> Self {
        if is_free {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable
        }
    }
}

/// Query de búsqueda normalizado y validado.
///
/// Los filtros opcionales se modelan como `Option`/set vacío, nunca como
/// valores centinela: filtro ausente y filtro que no matchea nada quedan
/// distinguibles.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Ubicación normalizada; cadena vacía = sin filtro de ubicación
    pub location: String,
    /// Rango solicitado, con start <= end garantizado
    pub requested: DateRange,
    /// Set de categorías; vacío = sin filtro de tipo
    pub categories: HashSet<VehicleCategory>,
    pub price_max: Option<i64>,
    pub rating_min: Option<f64>,
    pub availability: AvailabilityMode,
    /// Número de página, >= 1
    pub page: usize,
    /// Tamaño de página, en [1, 50]
    pub per_page: usize,
}
