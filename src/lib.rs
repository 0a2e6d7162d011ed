// ============================================================================
// TABLE BOOKING APP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;

use console_error_panic_hook;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Table Booking App - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico. Las actualizaciones incrementales
/// que no encuentran su elemento montado caen a re-render completo.
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                // Primero intentamos actualización incremental
                let needs_full_render = {
                    if let Some(ref app) = *app_cell.borrow() {
                        match app.update_incremental(inc_type) {
                            Ok(()) => false,
                            Err(e) => {
                                let error_str = format!("{:?}", e);
                                if error_str.contains("needs full render") {
                                    true
                                } else {
                                    web_sys::console::error_1(&JsValue::from_str(&format!(
                                        "❌ Error en actualización incremental: {:?}",
                                        e
                                    )));
                                    false
                                }
                            }
                        }
                    } else {
                        false
                    }
                };

                // Liberar el borrow anterior antes del re-render completo
                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        let _ = app_mut.render();
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        web_sys::console::error_1(&JsValue::from_str(&format!(
                            "❌ Error re-renderizando: {:?}",
                            e
                        )));
                    }
                }
            }
        }
    });
}

/// Re-render completo llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
