// ============================================================================
// TOP MENU VIEW - Navegación entre vistas y enlaces de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::{ActiveView, AppState};
use crate::views::booking_list::activate_booking_view;
use crate::views::restaurant_catalog::activate_catalog_view;

/// Renderizar el menú superior
pub fn render_top_menu(state: &AppState) -> Result<Element, JsValue> {
    let menu = ElementBuilder::new("nav")?.class("top-menu").build();

    let active = state.get_active_view();

    let restaurants_item = menu_item("Restaurant", active == ActiveView::Restaurants)?;
    {
        let state = state.clone();
        on_click(&restaurants_item, move |_e| {
            activate_catalog_view(&state);
        })?;
    }
    append_child(&menu, &restaurants_item)?;

    let bookings_item = menu_item("My Booking", active == ActiveView::MyBookings)?;
    {
        let state = state.clone();
        on_click(&bookings_item, move |_e| {
            activate_booking_view(&state);
        })?;
    }
    append_child(&menu, &bookings_item)?;

    // Lado derecho: los enlaces de sesión salen del SPA hacia el auth service
    let session_links = ElementBuilder::new("div")?.class("top-menu__session").build();
    let session = state.menu_session.borrow().clone();
    match session.as_ref().and_then(|session| session.user_name()) {
        Some(name) => {
            let sign_out = link_item("/api/auth/signout", &format!("Sign Out of {}", name))?;
            append_child(&session_links, &sign_out)?;
        }
        None => {
            let sign_in = link_item("/login", "Sign In")?;
            append_child(&session_links, &sign_in)?;

            let register = link_item("/register", "Create Account")?;
            append_child(&session_links, &register)?;
        }
    }
    append_child(&menu, &session_links)?;

    Ok(menu)
}

fn menu_item(title: &str, is_active: bool) -> Result<Element, JsValue> {
    let class = if is_active {
        "top-menu__item top-menu__item--active"
    } else {
        "top-menu__item"
    };
    Ok(ElementBuilder::new("button")?.class(class).text(title).build())
}

fn link_item(href: &str, title: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class("top-menu__link")
        .attr("href", href)?
        .text(title)
        .build())
}
