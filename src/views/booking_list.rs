// ============================================================================
// BOOKING LIST VIEW - Vista "My Booking"
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::services::ApiClient;
use crate::state::app_state::{ActiveView, AppState, NoticeLevel};
use crate::state::booking_state::BookingViewState;
use crate::viewmodels::BookingViewModel;
use crate::views::booking_card::render_booking_card;

/// Activar la vista "My Booking": resolver sesión y cargar las reservas
pub fn activate_booking_view(state: &AppState) {
    state.bookings.reset();
    state.set_active_view(ActiveView::MyBookings);

    let viewmodel = BookingViewModel::new(ApiClient::new(), state.bookings.clone());
    wasm_bindgen_futures::spawn_local(async move {
        viewmodel.load().await;
    });
}

/// Renderizar el contenedor de la lista de reservas
pub fn render_booking_list(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id("booking-list")?
        .class("booking-list")
        .build();
    fill_booking_list(&container, state)?;
    Ok(container)
}

/// Pintar el contenido de la lista según el estado actual. También lo usa la
/// actualización incremental sobre el contenedor ya montado.
pub fn fill_booking_list(container: &Element, state: &AppState) -> Result<(), JsValue> {
    match state.bookings.get_view_state() {
        BookingViewState::Loading => {
            let panel = message_panel("Loading your bookings...")?;
            append_child(container, &panel)?;
        }
        BookingViewState::Error(message) => {
            let panel = message_panel(&format!("Error: {}", message))?;
            append_child(container, &panel)?;
        }
        BookingViewState::Unauthenticated => {
            let panel = ElementBuilder::new("div")?.class("booking-panel").build();

            let title = ElementBuilder::new("h1")?
                .class("booking-panel__title")
                .text("Please sign in")
                .build();
            append_child(&panel, &title)?;

            // Enlace, no botón: salir del SPA hacia el auth service
            let sign_in = ElementBuilder::new("a")?
                .class("btn btn--primary")
                .attr("href", "/api/auth/signin")?
                .text("Sign In")
                .build();
            append_child(&panel, &sign_in)?;

            append_child(container, &panel)?;
        }
        BookingViewState::Ready(bookings) if bookings.is_empty() => {
            let panel = message_panel("You don't have any bookings.")?;
            append_child(container, &panel)?;
        }
        BookingViewState::Ready(bookings) => {
            let on_remove = build_remove_callback(state);
            let on_edit = build_edit_callback(state);
            for booking in &bookings {
                let card = render_booking_card(booking, on_remove.clone(), on_edit.clone())?;
                append_child(container, &card)?;
            }
        }
    }
    Ok(())
}

fn message_panel(message: &str) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("booking-panel").build();
    let title = ElementBuilder::new("h1")?
        .class("booking-panel__title")
        .text(message)
        .build();
    append_child(&panel, &title)?;
    Ok(panel)
}

/// Eliminar una reserva. La lista solo cambia si el backend confirma; ambos
/// desenlaces se anuncian en el banner.
fn build_remove_callback(state: &AppState) -> Rc<dyn Fn(String)> {
    let state = state.clone();
    Rc::new(move |booking_id: String| {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let viewmodel = BookingViewModel::new(ApiClient::new(), state.bookings.clone());
            match viewmodel.remove_booking(&booking_id).await {
                Ok(()) => {
                    state.show_notice(NoticeLevel::Success, "Booking removed successfully");
                }
                Err(err) => {
                    state.show_notice(
                        NoticeLevel::Error,
                        &format!("Could not remove booking: {}", err),
                    );
                }
            }
        });
    })
}

fn build_edit_callback(state: &AppState) -> Rc<dyn Fn(String)> {
    let state = state.clone();
    Rc::new(move |booking_id: String| {
        let current = state.bookings.get_view_state();
        if let Some(booking) = current.bookings().iter().find(|b| b.id == booking_id) {
            state.open_edit_modal(booking);
        }
    })
}
