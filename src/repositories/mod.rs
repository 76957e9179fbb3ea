//! Capa de repositorios

pub mod inventory_repository;
