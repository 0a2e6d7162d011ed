// ============================================================================
// CATALOG STATE - Estado de la vista del catálogo de restaurantes
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::restaurant::Restaurant;

/// Estados de la vista del catálogo
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogViewState {
    Loading,
    Error(String),
    Ready {
        count: usize,
        restaurants: Vec<Restaurant>,
    },
}

#[derive(Clone)]
pub struct CatalogState {
    view_state: Rc<RefCell<CatalogViewState>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            view_state: Rc::new(RefCell::new(CatalogViewState::Loading)),
        }
    }

    pub fn get_view_state(&self) -> CatalogViewState {
        self.view_state.borrow().clone()
    }

    /// Publicar un nuevo estado del catálogo (la vista se re-renderiza entera)
    pub fn set_view_state(&self, state: CatalogViewState) {
        *self.view_state.borrow_mut() = state;
        crate::rerender_app();
    }

    /// Volver a Loading sin re-render (la activación de la vista ya lo dispara)
    pub fn reset(&self) {
        *self.view_state.borrow_mut() = CatalogViewState::Loading;
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
