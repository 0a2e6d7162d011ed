// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::booking::Booking;
use crate::models::session::Session;
use crate::state::{BookingListState, CatalogState};
use crate::utils::datetime::to_datetime_local_value;

/// Milisegundos que un aviso permanece visible antes de auto-ocultarse
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de vista, login/logout, modales)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Re-renderizar solo la lista de reservas
    BookingList,
    /// Actualizar el banner de aviso (confirmación / error de mutación)
    Notice,
}

/// Vista activa de la aplicación (navegación en memoria, sin router)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Restaurants,
    MyBookings,
}

/// Nivel del aviso mostrado al usuario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Aviso efímero tras una mutación (eliminar / editar reserva)
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingListState,
    pub catalog: CatalogState,

    /// Sesión resuelta al arrancar, solo para los enlaces del menú.
    /// La vista de reservas resuelve la suya propia en cada activación.
    pub menu_session: Rc<RefCell<Option<Session>>>,

    // UI State
    pub active_view: Rc<RefCell<ActiveView>>,
    pub notice: Rc<RefCell<Option<Notice>>>,
    notice_seq: Rc<RefCell<u32>>,

    // Estado del modal de edición
    pub editing_booking_id: Rc<RefCell<Option<String>>>,
    pub edit_date_input_value: Rc<RefCell<String>>,
    pub saving_edit: Rc<RefCell<bool>>,
    pub edit_error_message: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            bookings: BookingListState::new(),
            catalog: CatalogState::new(),

            menu_session: Rc::new(RefCell::new(None)),

            active_view: Rc::new(RefCell::new(ActiveView::Restaurants)),
            notice: Rc::new(RefCell::new(None)),
            notice_seq: Rc::new(RefCell::new(0)),

            editing_booking_id: Rc::new(RefCell::new(None)),
            edit_date_input_value: Rc::new(RefCell::new(String::new())),
            saving_edit: Rc::new(RefCell::new(false)),
            edit_error_message: Rc::new(RefCell::new(None)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_active_view(&self) -> ActiveView {
        *self.active_view.borrow()
    }

    /// Cambiar de vista (re-render completo)
    pub fn set_active_view(&self, view: ActiveView) {
        *self.active_view.borrow_mut() = view;
        crate::rerender_app();
    }

    /// Sesión del menú, resuelta una sola vez al arrancar
    pub fn set_menu_session(&self, session: Option<Session>) {
        *self.menu_session.borrow_mut() = session;
        self.notify_subscribers();
    }

    pub fn get_notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    /// Mostrar un aviso y programar su auto-ocultado. Un aviso más nuevo
    /// invalida el timer del anterior.
    pub fn show_notice(&self, level: NoticeLevel, message: &str) {
        let seq = {
            let mut counter = self.notice_seq.borrow_mut();
            *counter = counter.wrapping_add(1);
            *counter
        };
        *self.notice.borrow_mut() = Some(Notice {
            level,
            message: message.to_string(),
        });
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));

        let notice = self.notice.clone();
        let notice_seq = self.notice_seq.clone();
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            if *notice_seq.borrow() == seq {
                *notice.borrow_mut() = None;
                crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Notice));
            }
        })
        .forget();
    }

    /// Abrir el modal de edición precargado con la fecha actual de la reserva
    pub fn open_edit_modal(&self, booking: &Booking) {
        *self.editing_booking_id.borrow_mut() = Some(booking.id.clone());
        *self.edit_date_input_value.borrow_mut() = to_datetime_local_value(&booking.reserve_date);
        *self.saving_edit.borrow_mut() = false;
        *self.edit_error_message.borrow_mut() = None;
        crate::rerender_app();
    }

    pub fn close_edit_modal(&self) {
        *self.editing_booking_id.borrow_mut() = None;
        *self.edit_date_input_value.borrow_mut() = String::new();
        *self.saving_edit.borrow_mut() = false;
        *self.edit_error_message.borrow_mut() = None;
        crate::rerender_app();
    }

    /// Marcar el guardado del modal en curso (deshabilita el botón Save)
    pub fn set_saving_edit(&self, saving: bool) {
        *self.saving_edit.borrow_mut() = saving;
        crate::rerender_app();
    }

    /// Mensaje de error dentro del modal de edición
    pub fn set_edit_error(&self, message: Option<String>) {
        *self.edit_error_message.borrow_mut() = message;
        crate::rerender_app();
    }

    /// Suscribirse a cambios de estado crítico (sesión del menú)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn booking() -> Booking {
        Booking {
            id: "b7".to_string(),
            reserve_date: Utc.with_ymd_and_hms(2025, 12, 24, 19, 0, 0).unwrap(),
            user: None,
            restaurant: None,
        }
    }

    #[test]
    fn starts_on_catalog_view_without_notice() {
        let state = AppState::new();
        assert_eq!(state.get_active_view(), ActiveView::Restaurants);
        assert_eq!(state.get_notice(), None);
        assert_eq!(*state.editing_booking_id.borrow(), None);
    }

    #[test]
    fn edit_modal_prefills_input_from_booking_date() {
        let state = AppState::new();
        state.open_edit_modal(&booking());

        assert_eq!(state.editing_booking_id.borrow().as_deref(), Some("b7"));
        assert_eq!(*state.edit_date_input_value.borrow(), "2025-12-24T19:00");
        assert!(!*state.saving_edit.borrow());

        state.close_edit_modal();
        assert_eq!(*state.editing_booking_id.borrow(), None);
        assert_eq!(*state.edit_date_input_value.borrow(), "");
    }

    #[test]
    fn subscribers_run_on_menu_session_change() {
        let state = AppState::new();
        let calls = Rc::new(RefCell::new(0));
        let calls_probe = calls.clone();
        state.subscribe_to_changes(move || {
            *calls_probe.borrow_mut() += 1;
        });

        state.set_menu_session(Some(Session::default()));
        state.set_menu_session(None);

        assert_eq!(*calls.borrow(), 2);
    }
}
