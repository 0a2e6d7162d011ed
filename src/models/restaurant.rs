// ============================================================================
// RESTAURANT - Restaurante del catálogo / referencia dentro de una reserva
// ============================================================================

use serde::{Deserialize, Serialize};

/// Restaurante tal como lo entrega el backend. El catálogo incluye `picture`;
/// la copia embebida en una reserva trae `address` y `phone`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_entry() {
        let json = r#"{"id":"r9","name":"Sushi Ten","picture":"https://cdn.example/r9.jpg"}"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.id, "r9");
        assert_eq!(restaurant.name, "Sushi Ten");
        assert_eq!(
            restaurant.picture.as_deref(),
            Some("https://cdn.example/r9.jpg")
        );
        assert_eq!(restaurant.address, None);
    }

    #[test]
    fn decodes_booking_embedded_entry_with_mongo_id() {
        let json = r#"{"_id":"64a1","name":"Cafe","address":"1 Main St","phone":"02-111-2222"}"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.id, "64a1");
        assert_eq!(restaurant.address.as_deref(), Some("1 Main St"));
        assert_eq!(restaurant.phone.as_deref(), Some("02-111-2222"));
    }
}
