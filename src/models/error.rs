// ============================================================================
// ERRORES - Taxonomía de errores del núcleo de reservas
// ============================================================================

use thiserror::Error;

/// La resolución de sesión falló. El caller no distingue causas: cualquier
/// fallo (red, HTTP no-2xx, payload ilegible) se trata igual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch session")]
pub struct SessionError {
    /// Detalle técnico, solo para logs
    pub detail: String,
}

impl SessionError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Fallos al cargar la lista de reservas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// El payload no es una secuencia de reservas válida. El detalle serde
    /// va a logs; el usuario ve el mensaje fijo.
    #[error("Bookings are not in the correct format")]
    Format(String),
}

/// Fallos de mutaciones (eliminar / editar una reserva)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Network error: {0}")]
    Network(String),
    /// El backend rechazó la operación
    #[error("{0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_displays_fixed_message() {
        let err = SessionError::new("HTTP 500: Internal Server Error");
        assert_eq!(err.to_string(), "Failed to fetch session");
        assert_eq!(err.detail, "HTTP 500: Internal Server Error");
    }

    #[test]
    fn fetch_error_messages() {
        let err = FetchError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = FetchError::Format("invalid type: map, expected a sequence".to_string());
        assert_eq!(err.to_string(), "Bookings are not in the correct format");
    }

    #[test]
    fn mutation_error_passes_through_rejection_message() {
        let err = MutationError::Rejected("Failed to update Booking".to_string());
        assert_eq!(err.to_string(), "Failed to update Booking");

        let err = MutationError::Network("fetch aborted".to_string());
        assert_eq!(err.to_string(), "Network error: fetch aborted");
    }
}
