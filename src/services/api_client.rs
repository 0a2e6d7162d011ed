// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;

use crate::models::booking::Booking;
use crate::models::error::{FetchError, MutationError, SessionError};
use crate::models::restaurant::Restaurant;
use crate::models::session::Session;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Resolver la sesión actual contra el auth service.
    /// Ruta relativa: la sirve el mismo host que la app, no el backend.
    pub async fn resolve_session(&self) -> Result<Session, SessionError> {
        log::info!("🔐 Resolviendo sesión de usuario");

        let response = Request::get("/api/auth/session")
            .send()
            .await
            .map_err(|e| SessionError::new(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(SessionError::new(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let session = response
            .json::<Session>()
            .await
            .map_err(|e| SessionError::new(format!("Parse error: {}", e)))?;

        match session.user_name() {
            Some(name) => log::info!("✅ Sesión activa para: {}", name),
            None => log::info!("ℹ️ Sin sesión activa"),
        }

        Ok(session)
    }

    /// Listar las reservas del usuario autenticado
    pub async fn fetch_bookings(&self, token: &str) -> Result<Vec<Booking>, FetchError> {
        let url = format!("{}/api/reservations", self.base_url);

        log::info!("📋 Obteniendo reservas del usuario");

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let bookings = response
            .json::<Vec<Booking>>()
            .await
            .map_err(|e| FetchError::Format(e.to_string()))?;

        log::info!("✅ Reservas obtenidas: {}", bookings.len());

        Ok(bookings)
    }

    /// Eliminar una reserva
    pub async fn remove_booking(&self, token: &str, booking_id: &str) -> Result<(), MutationError> {
        let url = format!("{}/api/reservations/{}", self.base_url, booking_id);

        log::info!("🗑️ Eliminando reserva: {}", booking_id);

        let response = Request::delete(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(MutationError::Rejected(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        Ok(())
    }

    /// Actualizar fecha (y restaurante) de una reserva; devuelve la reserva actualizada
    pub async fn edit_booking(
        &self,
        token: &str,
        booking_id: &str,
        reserve_date: DateTime<Utc>,
        restaurant_id: &str,
    ) -> Result<Booking, MutationError> {
        let url = format!("{}/api/reservations/{}", self.base_url, booking_id);
        let request = EditBookingRequest {
            reserve_date: reserve_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            restaurant: restaurant_id.to_string(),
        };

        log::info!("📝 Actualizando reserva: {}", booking_id);

        let response = Request::put(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(&request)
            .map_err(|e| MutationError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| MutationError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(MutationError::Rejected("Failed to update Booking".to_string()));
        }

        response
            .json::<Booking>()
            .await
            .map_err(|e| MutationError::Rejected(format!("Parse error: {}", e)))
    }

    /// Perfil del usuario autenticado
    pub async fn get_user_profile(&self, token: &str) -> Result<UserProfile, String> {
        let url = format!("{}/api/auth/me", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err("Cannot get user profile".to_string());
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Catálogo completo de restaurantes
    pub async fn get_restaurants(&self) -> Result<RestaurantListResponse, String> {
        let url = format!("{}/api/restaurants", self.base_url);

        log::info!("🍽️ Obteniendo catálogo de restaurantes");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let catalog = response
            .json::<RestaurantListResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Catálogo obtenido: {} restaurantes", catalog.count);

        Ok(catalog)
    }
}

#[derive(serde::Serialize)]
struct EditBookingRequest {
    #[serde(rename = "reserveDate")]
    reserve_date: String,
    restaurant: String,
}

#[derive(serde::Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProfileData>,
}

#[derive(serde::Deserialize)]
pub struct ProfileData {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct RestaurantListResponse {
    pub count: usize,
    pub data: Vec<Restaurant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_restaurant_catalog_response() {
        let json = r#"{
            "count": 2,
            "data": [
                {"id": "r1", "name": "Cafe", "picture": "https://cdn.example/r1.jpg"},
                {"id": "r2", "name": "Sushi Ten"}
            ]
        }"#;
        let catalog: RestaurantListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.count, 2);
        assert_eq!(catalog.data[0].name, "Cafe");
        assert_eq!(catalog.data[1].picture, None);
    }

    #[test]
    fn decodes_user_profile_response() {
        let json = r#"{
            "success": true,
            "data": {"_id": "u1", "name": "A", "email": "a@b.c", "createdAt": "2025-01-15T09:00:00.000Z"}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.success);
        let data = profile.data.unwrap();
        assert_eq!(data.id.as_deref(), Some("u1"));
        assert_eq!(data.name.as_deref(), Some("A"));
        assert_eq!(data.created_at.as_deref(), Some("2025-01-15T09:00:00.000Z"));
    }

    #[test]
    fn edit_request_serializes_backend_field_names() {
        let request = EditBookingRequest {
            reserve_date: "2025-05-05T14:30:00.000Z".to_string(),
            restaurant: "r1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reserveDate"], "2025-05-05T14:30:00.000Z");
        assert_eq!(json["restaurant"], "r1");
    }
}
