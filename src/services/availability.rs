//! Chequeo de disponibilidad
//!
//! Este módulo decide si un vehículo está libre para un rango solicitado.
//! Funciones puras, sin efectos: solo dependen de sus argumentos.

use crate::models::vehicle::{DateRange, Vehicle};

/// Dos rangos cerrados se solapan si comparten al menos un día calendario.
///
/// Extremos que se tocan cuentan como solapamiento: modelo de reserva con
/// granularidad de día.
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    !(a.end < b.start || b.end < a.start)
}

/// Un vehículo está disponible si ninguna de sus reservas se solapa con el
/// rango solicitado. Sin reservas, siempre disponible.
pub fn is_available(vehicle: &Vehicle, requested: &DateRange) -> bool {
    vehicle
        .booked_ranges
        .iter()
        .all(|booked| !ranges_overlap(requested, booked))
}
