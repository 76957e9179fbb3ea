//! Repositorio de inventario
//!
//! Este módulo define la fuente de datos de solo lectura que consume el
//! pipeline de búsqueda, y una implementación en memoria con datos seed.
//! Un colaborador respaldado por persistencia puede sustituirla sin tocar
//! la lógica del pipeline.

use chrono::NaiveDate;

use crate::models::vehicle::{DateRange, Vehicle, VehicleCategory};

/// Fuente de datos de vehículos para el path de búsqueda.
///
/// De solo lectura: la secuencia devuelta es completa y su orden es estable,
/// y ese orden es el que preserva el pipeline.
pub trait VehicleInventory: Send + Sync {
    fn vehicles(&self) -> &[Vehicle];
}

/// Inventario en memoria con el set demo de cuatro vehículos
pub struct InMemoryInventory {
    vehicles: Vec<Vehicle>,
}

impl InMemoryInventory {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Inventario seed de demo (reemplazable por un repositorio real)
    pub fn seed() -> Self {
        Self::new(vec![
            Vehicle {
                id: "car_001".to_string(),
                title: "Tesla Model 3".to_string(),
                category: VehicleCategory::Electric,
                location: "San Francisco".to_string(),
                rating: 4.8,
                price_per_day: 180,
                image: "https://picsum.photos/seed/tesla/640/360".to_string(),
                features: vec![
                    "AutoPilot".to_string(),
                    "GPS".to_string(),
                    "Heated Seats".to_string(),
                ],
                booked_ranges: vec![DateRange::new(date(2025, 11, 14), date(2025, 11, 16))],
            },
            Vehicle {
                id: "car_002".to_string(),
                title: "Toyota RAV4".to_string(),
                category: VehicleCategory::Suv,
                location: "San Francisco".to_string(),
                rating: 4.5,
                price_per_day: 95,
                image: "https://picsum.photos/seed/rav4/640/360".to_string(),
                features: vec![
                    "AWD".to_string(),
                    "Apple CarPlay".to_string(),
                    "AC".to_string(),
                ],
                booked_ranges: vec![DateRange::new(date(2025, 11, 10), date(2025, 11, 11))],
            },
            Vehicle {
                id: "car_003".to_string(),
                title: "Mercedes C-Class".to_string(),
                category: VehicleCategory::Luxury,
                location: "Los Angeles".to_string(),
                rating: 4.7,
                price_per_day: 210,
                image: "https://picsum.photos/seed/merc/640/360".to_string(),
                features: vec![
                    "Leather".to_string(),
                    "GPS".to_string(),
                    "Cruise Control".to_string(),
                ],
                booked_ranges: vec![],
            },
            Vehicle {
                id: "car_004".to_string(),
                title: "Honda Civic".to_string(),
                category: VehicleCategory::Sedan,
                location: "San Francisco".to_string(),
                rating: 4.3,
                price_per_day: 60,
                image: "https://picsum.photos/seed/civic/640/360".to_string(),
                features: vec![
                    "Eco".to_string(),
                    "Bluetooth".to_string(),
                    "AC".to_string(),
                ],
                booked_ranges: vec![DateRange::new(date(2025, 11, 20), date(2025, 11, 22))],
            },
        ])
    }
}

impl VehicleInventory for InMemoryInventory {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fecha seed válida")
}
