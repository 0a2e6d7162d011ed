// ============================================================================
// RESTAURANT CARD VIEW - Card de un restaurante del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::restaurant::Restaurant;

pub fn render_restaurant_card(restaurant: &Restaurant) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("restaurant-card").build();

    if let Some(picture) = &restaurant.picture {
        let image = ElementBuilder::new("img")?
            .class("restaurant-card__image")
            .attr("src", picture)?
            .attr("alt", &restaurant.name)?
            .build();
        append_child(&card, &image)?;
    }

    let name = ElementBuilder::new("div")?
        .class("restaurant-card__name")
        .text(&restaurant.name)
        .build();
    append_child(&card, &name)?;

    Ok(card)
}
