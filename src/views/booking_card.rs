// ============================================================================
// BOOKING CARD VIEW - Card de una reserva con sus acciones
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::booking::Booking;
use crate::utils::datetime::format_booking_date;

/// Renderizar la card de una reserva. Los callbacks reciben el id de la
/// reserva sobre la que actuar.
pub fn render_booking_card(
    booking: &Booking,
    on_remove: Rc<dyn Fn(String)>,
    on_edit: Rc<dyn Fn(String)>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("booking-card")
        .attr("data-booking-id", &booking.id)?
        .build();

    if let Some(user) = &booking.user {
        let reserved_by = ElementBuilder::new("div")?
            .class("booking-card__row")
            .text(&format!("Reserved By: {}", user.name))
            .build();
        append_child(&card, &reserved_by)?;
    }

    let date = ElementBuilder::new("div")?
        .class("booking-card__row")
        .text(&format!("Date: {}", format_booking_date(&booking.reserve_date)))
        .build();
    append_child(&card, &date)?;

    match &booking.restaurant {
        Some(restaurant) => {
            let name = ElementBuilder::new("div")?
                .class("booking-card__row")
                .text(&format!("Restaurant Name: {}", restaurant.name))
                .build();
            append_child(&card, &name)?;

            if let Some(address) = &restaurant.address {
                let row = ElementBuilder::new("div")?
                    .class("booking-card__row")
                    .text(&format!("Address: {}", address))
                    .build();
                append_child(&card, &row)?;
            }

            if let Some(phone) = &restaurant.phone {
                let row = ElementBuilder::new("div")?
                    .class("booking-card__row")
                    .text(&format!("Phone: {}", phone))
                    .build();
                append_child(&card, &row)?;
            }
        }
        None => {
            let row = ElementBuilder::new("div")?
                .class("booking-card__row booking-card__row--muted")
                .text("No restaurant specified")
                .build();
            append_child(&card, &row)?;
        }
    }

    let actions = ElementBuilder::new("div")?.class("booking-card__actions").build();

    let remove_btn = ElementBuilder::new("button")?
        .class("btn btn--danger")
        .text("Remove from Booking")
        .build();
    {
        let booking_id = booking.id.clone();
        on_click(&remove_btn, move |_e| {
            on_remove(booking_id.clone());
        })?;
    }
    append_child(&actions, &remove_btn)?;

    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn--secondary")
        .text("Edit Booking")
        .build();
    {
        let booking_id = booking.id.clone();
        on_click(&edit_btn, move |_e| {
            on_edit(booking_id.clone());
        })?;
    }
    append_child(&actions, &edit_btn)?;

    append_child(&card, &actions)?;

    Ok(card)
}
