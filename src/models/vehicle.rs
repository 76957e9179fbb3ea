//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del inventario de alquiler
//! y los tipos de apoyo: categoría y rango de fechas reservado.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categoría del vehículo - set fijo (SUV, Sedan, Electric, Luxury) pero extensible
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleCategory {
    Suv,
    Sedan,
    Electric,
    Luxury,
    Other(String),
}

impl VehicleCategory {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Sedan => "Sedan",
            VehicleCategory::Electric => "Electric",
            VehicleCategory::Luxury => "Luxury",
            VehicleCategory::Other(label) => label,
        }
    }
}

impl From<String> for VehicleCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUV" => VehicleCategory::Suv,
            "Sedan" => VehicleCategory::Sedan,
            "Electric" => VehicleCategory::Electric,
            "Luxury" => VehicleCategory::Luxury,
            // Etiquetas desconocidas se conservan tal cual
            _ => VehicleCategory::Other(value),
        }
    }
}

impl From<VehicleCategory> for String {
    fn from(value: VehicleCategory) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rango de fechas cerrado (ambos extremos inclusive).
///
/// El invariante start <= end se garantiza al parsear el rango solicitado;
/// los rangos reservados del inventario se toman como vienen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Vehicle del inventario - registro estático para el path de búsqueda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub title: String,
    pub category: VehicleCategory,
    pub location: String,
    pub rating: f64,
    pub price_per_day: i64,
    pub image: String,
    pub features: Vec<String>,
    pub booked_ranges: Vec<DateRange>,
}
