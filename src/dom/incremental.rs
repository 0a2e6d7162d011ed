// ============================================================================
// INCREMENTAL UPDATES - Actualizaciones directas del DOM sin re-render global
// ============================================================================
// Contrato: devolver Err con "needs full render" cuando el elemento objetivo
// no existe pero debería mostrarse; lib.rs hace entonces el fallback completo.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, set_class_name, set_inner_html, set_text_content};
use crate::state::app_state::AppState;
use crate::views::booking_list::fill_booking_list;
use crate::views::notice::notice_class;

/// Re-renderizar solo el contenido de la lista de reservas.
/// Si la vista activa no la muestra, no hay nada que actualizar: el estado
/// queda guardado y se pinta en la próxima activación de la vista.
pub fn update_booking_list(state: &AppState) -> Result<(), JsValue> {
    let container = match get_element_by_id("booking-list") {
        Some(container) => container,
        None => {
            log::info!("ℹ️ Lista de reservas no visible, sin actualización DOM");
            return Ok(());
        }
    };

    set_inner_html(&container, "");
    fill_booking_list(&container, state)
}

/// Sincronizar el banner de aviso con el estado actual
pub fn update_notice(state: &AppState) -> Result<(), JsValue> {
    match (get_element_by_id("notice"), state.get_notice()) {
        (Some(banner), Some(notice)) => {
            set_class_name(&banner, notice_class(notice.level));
            set_text_content(&banner, &notice.message);
            Ok(())
        }
        (Some(banner), None) => {
            banner.remove();
            Ok(())
        }
        // El banner todavía no está montado: hace falta el render completo
        (None, Some(_)) => Err(JsValue::from_str("Notice not mounted, needs full render")),
        (None, None) => Ok(()),
    }
}
