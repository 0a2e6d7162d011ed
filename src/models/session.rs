// ============================================================================
// SESSION - Sesión de autenticación resuelta por el auth service
// ============================================================================

use serde::{Deserialize, Serialize};

/// Sesión devuelta por el endpoint de auth. Sin `user` (o con token vacío)
/// la sesión cuenta como no autenticada.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    /// Bearer token si la sesión está realmente autenticada
    pub fn token(&self) -> Option<&str> {
        self.user
            .as_ref()?
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    /// Nombre del usuario, si hay uno
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }
}
