//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para normalización de texto
//! y parseo de fechas de la query string.

use chrono::NaiveDate;

/// Colapsar runs de espacios a uno solo, recortar y pasar a minúsculas
pub fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parsear fecha en formato YYYY-MM-DD; None si el valor no es una fecha válida
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
