// ============================================================================
// NOTICE VIEW - Banner de confirmación/error tras una mutación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, NoticeLevel};

/// Clase CSS del banner según nivel (la usa también la actualización incremental)
pub fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    }
}

/// Renderizar el banner de aviso. None cuando no hay nada que mostrar.
pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let notice = match state.get_notice() {
        Some(notice) => notice,
        None => return Ok(None),
    };

    let banner = ElementBuilder::new("div")?
        .id("notice")?
        .class(notice_class(notice.level))
        .text(&notice.message)
        .build();

    Ok(Some(banner))
}
