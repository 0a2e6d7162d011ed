// ============================================================================
// BOOKING - Reserva de mesa (propiedad del backend, copia cacheada en cliente)
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::restaurant::Restaurant;

/// Reserva tal como la entrega el backend. `user` y `restaurant` pueden
/// faltar (p.ej. restaurante borrado); el Option es explícito, no un `any`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "reserveDate")]
    pub reserve_date: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub restaurant: Option<Restaurant>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingUser {
    pub name: String,
}

impl Booking {
    /// Id del restaurante asociado, si la reserva aún conserva uno
    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant.as_ref().map(|r| r.id.as_str())
    }
}
