// ============================================================================
// RESTAURANT CATALOG VIEW - Catálogo público de restaurantes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::services::ApiClient;
use crate::state::app_state::{ActiveView, AppState};
use crate::state::catalog_state::{CatalogState, CatalogViewState};
use crate::views::restaurant_card::render_restaurant_card;

/// Activar la vista del catálogo y lanzar la carga de restaurantes
pub fn activate_catalog_view(state: &AppState) {
    state.catalog.reset();
    state.set_active_view(ActiveView::Restaurants);

    let catalog = state.catalog.clone();
    wasm_bindgen_futures::spawn_local(async move {
        load_catalog(ApiClient::new(), catalog).await;
    });
}

async fn load_catalog(api: ApiClient, catalog: CatalogState) {
    match api.get_restaurants().await {
        Ok(response) => {
            catalog.set_view_state(CatalogViewState::Ready {
                count: response.count,
                restaurants: response.data,
            });
        }
        Err(err) => {
            log::error!("❌ Error cargando el catálogo: {}", err);
            catalog.set_view_state(CatalogViewState::Error(err));
        }
    }
}

/// Renderizar el catálogo según su estado
pub fn render_restaurant_catalog(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("catalog").build();

    match state.catalog.get_view_state() {
        CatalogViewState::Loading => {
            let message = ElementBuilder::new("h1")?
                .class("catalog__message")
                .text("Loading restaurants...")
                .build();
            append_child(&container, &message)?;
        }
        CatalogViewState::Error(message) => {
            let error = ElementBuilder::new("h1")?
                .class("catalog__message")
                .text(&format!("Error: {}", message))
                .build();
            append_child(&container, &error)?;
        }
        CatalogViewState::Ready { count, restaurants } => {
            let header = ElementBuilder::new("div")?
                .class("catalog__header")
                .text(&format!("Explore {} restaurants in our catalog", count))
                .build();
            append_child(&container, &header)?;

            let grid = ElementBuilder::new("div")?.class("catalog__grid").build();
            for restaurant in &restaurants {
                let card = render_restaurant_card(restaurant)?;
                append_child(&grid, &card)?;
            }
            append_child(&container, &grid)?;
        }
    }

    Ok(container)
}
