//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El inventario es de solo lectura durante
//! la búsqueda, así que los requests concurrentes no necesitan locking.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::inventory_repository::VehicleInventory;
use crate::services::search_service::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<dyn VehicleInventory>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(inventory: Arc<dyn VehicleInventory>, config: EnvironmentConfig) -> Self {
        Self { inventory, config }
    }

    /// Servicio de búsqueda sobre el inventario compartido
    pub fn search_service(&self) -> SearchService {
        SearchService::new(self.inventory.clone())
    }
}
