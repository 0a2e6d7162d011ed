// ============================================================================
// BOOKING STATE - Estado de la vista "My Booking" (Rc<RefCell>)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::booking::Booking;
use crate::models::session::Session;
use crate::state::app_state::{IncrementalUpdate, UpdateType};

/// Estados mutuamente excluyentes de la vista de reservas. Exactamente uno
/// está activo; las transiciones ocurren solo al completar la resolución de
/// sesión, el fetch o una mutación.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingViewState {
    Loading,
    Error(String),
    Unauthenticated,
    Ready(Vec<Booking>),
}

impl BookingViewState {
    pub fn is_ready(&self) -> bool {
        matches!(self, BookingViewState::Ready(_))
    }

    /// Reservas visibles (vacío fuera de Ready)
    pub fn bookings(&self) -> &[Booking] {
        match self {
            BookingViewState::Ready(list) => list,
            _ => &[],
        }
    }
}

/// Estado observable de la vista de reservas. La sesión resuelta vive aquí
/// durante una activación de la vista y muere con la siguiente.
#[derive(Clone)]
pub struct BookingListState {
    view_state: Rc<RefCell<BookingViewState>>,
    session: Rc<RefCell<Option<Session>>>,
}

impl BookingListState {
    pub fn new() -> Self {
        Self {
            view_state: Rc::new(RefCell::new(BookingViewState::Loading)),
            session: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_view_state(&self) -> BookingViewState {
        self.view_state.borrow().clone()
    }

    /// Publicar un nuevo estado y actualizar la lista en el DOM
    pub fn set_view_state(&self, state: BookingViewState) {
        *self.view_state.borrow_mut() = state;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::BookingList));
    }

    /// Nueva activación de la vista: volver a Loading y descartar la sesión
    pub fn reset(&self) {
        *self.view_state.borrow_mut() = BookingViewState::Loading;
        *self.session.borrow_mut() = None;
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    /// Token vigente de la sesión resuelta para esta activación
    pub fn token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .and_then(|session| session.token().map(|token| token.to_string()))
    }

    /// Quitar de la lista una reserva ya confirmada como eliminada por el
    /// backend. El resto de entradas queda intacto. Fuera de Ready no hace nada.
    pub fn remove_booking(&self, booking_id: &str) {
        {
            let mut state = self.view_state.borrow_mut();
            if let BookingViewState::Ready(list) = &mut *state {
                list.retain(|booking| booking.id != booking_id);
            }
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::BookingList));
    }

    /// Sustituir una reserva por su versión actualizada (tras un edit confirmado)
    pub fn replace_booking(&self, updated: Booking) {
        {
            let mut state = self.view_state.borrow_mut();
            if let BookingViewState::Ready(list) = &mut *state {
                if let Some(slot) = list.iter_mut().find(|booking| booking.id == updated.id) {
                    *slot = updated;
                }
            }
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::BookingList));
    }
}

impl Default for BookingListState {
    fn default() -> Self {
        Self::new()
    }
}
