// ============================================================================
// BOOKING GATEWAY - Capacidad inyectable para la vista de reservas
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::booking::Booking;
use crate::models::error::{FetchError, MutationError, SessionError};
use crate::models::session::Session;
use crate::services::api_client::ApiClient;

/// Operaciones que necesita el view-model de reservas. La capacidad se
/// inyecta en el constructor en lugar de consultarse desde un store
/// ambiente; los tests sustituyen el backend por un mock.
#[allow(async_fn_in_trait)]
pub trait BookingGateway {
    async fn resolve_session(&self) -> Result<Session, SessionError>;
    async fn fetch_bookings(&self, token: &str) -> Result<Vec<Booking>, FetchError>;
    async fn remove_booking(&self, token: &str, booking_id: &str) -> Result<(), MutationError>;
    async fn edit_booking(
        &self,
        token: &str,
        booking_id: &str,
        reserve_date: DateTime<Utc>,
        restaurant_id: &str,
    ) -> Result<Booking, MutationError>;
}

impl BookingGateway for ApiClient {
    async fn resolve_session(&self) -> Result<Session, SessionError> {
        ApiClient::resolve_session(self).await
    }

    async fn fetch_bookings(&self, token: &str) -> Result<Vec<Booking>, FetchError> {
        ApiClient::fetch_bookings(self, token).await
    }

    async fn remove_booking(&self, token: &str, booking_id: &str) -> Result<(), MutationError> {
        ApiClient::remove_booking(self, token, booking_id).await
    }

    async fn edit_booking(
        &self,
        token: &str,
        booking_id: &str,
        reserve_date: DateTime<Utc>,
        restaurant_id: &str,
    ) -> Result<Booking, MutationError> {
        ApiClient::edit_booking(self, token, booking_id, reserve_date, restaurant_id).await
    }
}
