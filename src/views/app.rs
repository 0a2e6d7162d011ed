// ============================================================================
// APP VIEW - Composición de la aplicación completa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::app_state::{ActiveView, AppState};
use crate::views::booking_list::render_booking_list;
use crate::views::edit_modal::render_edit_modal;
use crate::views::notice::render_notice;
use crate::views::restaurant_catalog::render_restaurant_catalog;
use crate::views::top_menu::render_top_menu;

/// Renderizar la aplicación completa según el estado actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();

    let menu = render_top_menu(state)?;
    append_child(&container, &menu)?;

    if let Some(banner) = render_notice(state)? {
        append_child(&container, &banner)?;
    }

    let main = ElementBuilder::new("main")?.class("app-main").build();
    match state.get_active_view() {
        ActiveView::Restaurants => {
            let catalog = render_restaurant_catalog(state)?;
            append_child(&main, &catalog)?;
        }
        ActiveView::MyBookings => {
            let list = render_booking_list(state)?;
            append_child(&main, &list)?;
        }
    }
    append_child(&container, &main)?;

    if let Some(modal) = render_edit_modal(state)? {
        append_child(&container, &modal)?;
    }

    Ok(container)
}
