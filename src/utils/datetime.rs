// Helpers de fecha para las reservas (chrono)

use chrono::{DateTime, NaiveDateTime, Utc};

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formato legible para las cards de reserva, ej: "Mon, 05 May 2025 14:30"
pub fn format_booking_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M").to_string()
}

/// Valor para inputs `datetime-local` (sin zona, minutos de precisión)
pub fn to_datetime_local_value(date: &DateTime<Utc>) -> String {
    date.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Parsear el valor de un input `datetime-local`; None si el string no es válido
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
