// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::{update_booking_list, update_notice};
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::ApiClient;
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;
use crate::views::restaurant_catalog::activate_catalog_view;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación montada sobre el elemento #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Resolver la sesión una vez para los enlaces del menú. Cada
        // activación de "My Booking" resuelve después la suya propia.
        {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.resolve_session().await {
                    Ok(mut session) => {
                        // El nombre del menú sale del perfil cuando hay token
                        if let Some(token) = session.token().map(str::to_string) {
                            match api.get_user_profile(&token).await {
                                Ok(profile) => {
                                    if let Some(name) =
                                        profile.data.and_then(|data| data.name)
                                    {
                                        log::info!("👤 [APP] Perfil cargado: {}", name);
                                        if let Some(user) = session.user.as_mut() {
                                            user.name = name;
                                        }
                                    }
                                }
                                Err(err) => {
                                    log::warn!("⚠️ [APP] {}", err);
                                }
                            }
                        }
                        state_clone.set_menu_session(Some(session));
                    }
                    Err(err) => {
                        log::warn!("⚠️ [APP] Sesión del menú no disponible: {}", err.detail);
                    }
                }
            });
        }

        // La vista inicial es el catálogo; lanzar su carga
        activate_catalog_view(&state);

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Batchear múltiples updates en el mismo tick
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::BookingList => {
                update_booking_list(&self.state)?;
            }
            IncrementalUpdate::Notice => {
                update_notice(&self.state)?;
            }
        }
        Ok(())
    }
}
