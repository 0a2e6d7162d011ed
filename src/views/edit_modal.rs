// ============================================================================
// EDIT MODAL VIEW - Modal de edición de una reserva
// ============================================================================
// El modal solo edita la fecha; el restaurante se reenvía tal cual porque el
// backend lo exige en el payload de actualización.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, set_attribute, ElementBuilder};
use crate::models::booking::Booking;
use crate::services::ApiClient;
use crate::state::app_state::{AppState, NoticeLevel};
use crate::utils::datetime::parse_datetime_local;
use crate::viewmodels::BookingViewModel;

/// Renderizar el modal de edición. None si no hay edición en curso o la
/// reserva editada ya no está en la lista.
pub fn render_edit_modal(state: &AppState) -> Result<Option<Element>, JsValue> {
    let booking_id = match state.editing_booking_id.borrow().clone() {
        Some(id) => id,
        None => return Ok(None),
    };

    let current = state.bookings.get_view_state();
    let booking = match current.bookings().iter().find(|b| b.id == booking_id) {
        Some(booking) => booking.clone(),
        None => return Ok(None),
    };

    // Siempre con "active": solo se renderiza cuando debe mostrarse
    let modal = ElementBuilder::new("div")?
        .id("edit-modal")?
        .class("modal active")
        .build();

    // Overlay (cierra al hacer click)
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    {
        let state = state.clone();
        on_click(&overlay, move |_e| {
            state.close_edit_modal();
        })?;
    }
    append_child(&modal, &overlay)?;

    // Modal content (previene cierre al click dentro)
    let content = ElementBuilder::new("div")?.class("modal-content").build();
    {
        let closure = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.stop_propagation();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        content.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Header
    let header = ElementBuilder::new("div")?.class("modal-header").build();

    let title = ElementBuilder::new("h2")?.text("Edit Booking").build();

    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_e| {
            state.close_edit_modal();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    append_child(&content, &header)?;

    // Body
    let body = ElementBuilder::new("div")?.class("modal-body").build();

    if let Some(error_message) = state.edit_error_message.borrow().as_ref() {
        let error_div = ElementBuilder::new("div")?
            .class("error-message")
            .text(error_message)
            .build();
        append_child(&body, &error_div)?;
    }

    let restaurant_name = booking
        .restaurant
        .as_ref()
        .map(|restaurant| restaurant.name.as_str())
        .unwrap_or("No restaurant specified");
    let restaurant_row = ElementBuilder::new("div")?
        .class("modal-row")
        .text(&format!("Restaurant: {}", restaurant_name))
        .build();
    append_child(&body, &restaurant_row)?;

    let label = ElementBuilder::new("label")?
        .class("modal-label")
        .attr("for", "edit-reserve-date")?
        .text("Reservation date")
        .build();
    append_child(&body, &label)?;

    let input = ElementBuilder::new("input")?
        .id("edit-reserve-date")?
        .class("edit-input")
        .attr("type", "datetime-local")?
        .attr("value", &state.edit_date_input_value.borrow())?
        .build();
    {
        let state = state.clone();
        on_input(&input, move |e| {
            if let Some(input_el) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                *state.edit_date_input_value.borrow_mut() = input_el.value();
            }
        })?;
    }
    append_child(&body, &input)?;

    append_child(&content, &body)?;

    // Footer
    let footer = ElementBuilder::new("div")?.class("modal-footer").build();

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn--secondary")
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel_btn, move |_e| {
            state.close_edit_modal();
        })?;
    }
    append_child(&footer, &cancel_btn)?;

    let saving = *state.saving_edit.borrow();
    let save_btn = ElementBuilder::new("button")?
        .class("btn btn--primary")
        .text(if saving { "Saving..." } else { "Save" })
        .build();
    if saving {
        set_attribute(&save_btn, "disabled", "disabled")?;
    }
    {
        let state = state.clone();
        on_click(&save_btn, move |_e| {
            submit_edit(&state, &booking);
        })?;
    }
    append_child(&footer, &save_btn)?;

    append_child(&content, &footer)?;
    append_child(&modal, &content)?;

    Ok(Some(modal))
}

/// Validar el input y lanzar el guardado contra el backend
fn submit_edit(state: &AppState, booking: &Booking) {
    if *state.saving_edit.borrow() {
        return;
    }

    let raw_value = state.edit_date_input_value.borrow().clone();
    let reserve_date = match parse_datetime_local(&raw_value) {
        Some(date) => date,
        None => {
            state.set_edit_error(Some("Please pick a valid date and time".to_string()));
            return;
        }
    };

    let restaurant_id = match booking.restaurant_id() {
        Some(id) => id.to_string(),
        None => {
            state.set_edit_error(Some(
                "This booking has no restaurant to update".to_string(),
            ));
            return;
        }
    };

    state.set_saving_edit(true);

    let state = state.clone();
    let booking_id = booking.id.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let viewmodel = BookingViewModel::new(ApiClient::new(), state.bookings.clone());
        match viewmodel
            .edit_booking(&booking_id, reserve_date, &restaurant_id)
            .await
        {
            Ok(()) => {
                state.close_edit_modal();
                state.show_notice(NoticeLevel::Success, "Booking updated successfully");
            }
            Err(err) => {
                state.set_saving_edit(false);
                state.set_edit_error(Some(err.to_string()));
            }
        }
    });
}
