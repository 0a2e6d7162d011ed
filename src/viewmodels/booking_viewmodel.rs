// ============================================================================
// BOOKING VIEWMODEL - Ciclo de vida de la vista de reservas
// ============================================================================
// Orquesta: resolver sesión → fetch autenticado → publicar estado → mutaciones.
// El gateway se inyecta; las vistas no hablan HTTP directamente.
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::error::MutationError;
use crate::services::gateway::BookingGateway;
use crate::state::booking_state::{BookingListState, BookingViewState};

/// ViewModel de la vista "My Booking"
pub struct BookingViewModel<G: BookingGateway> {
    gateway: G,
    state: BookingListState,
}

impl<G: BookingGateway> BookingViewModel<G> {
    pub fn new(gateway: G, state: BookingListState) -> Self {
        Self { gateway, state }
    }

    /// Activación de la vista: resolver sesión y, solo con token, cargar las
    /// reservas. Publica exactamente un estado terminal por activación; la
    /// máquina solo vuelve a Loading en una activación nueva.
    pub async fn load(&self) {
        self.state.reset();

        let session = match self.gateway.resolve_session().await {
            Ok(session) => session,
            Err(err) => {
                log::error!("❌ Error resolviendo sesión: {}", err.detail);
                self.state
                    .set_view_state(BookingViewState::Error(err.to_string()));
                return;
            }
        };

        // El fetch solo es alcanzable desde una sesión con token
        let token = match session.token() {
            Some(token) => token.to_string(),
            None => {
                log::info!("🔒 Sesión sin token: vista no autenticada");
                self.state.set_session(Some(session));
                self.state.set_view_state(BookingViewState::Unauthenticated);
                return;
            }
        };

        self.state.set_session(Some(session));

        match self.gateway.fetch_bookings(&token).await {
            Ok(bookings) => {
                self.state.set_view_state(BookingViewState::Ready(bookings));
            }
            Err(err) => {
                log::error!("❌ Error cargando reservas: {}", err);
                self.state
                    .set_view_state(BookingViewState::Error(err.to_string()));
            }
        }
    }

    /// Eliminar una reserva. La lista solo se toca si el backend confirma;
    /// en caso de fallo queda intacta y el caller decide qué mostrar.
    pub async fn remove_booking(&self, booking_id: &str) -> Result<(), MutationError> {
        if !self.state.get_view_state().is_ready() {
            return Err(MutationError::Rejected(
                "Bookings are not loaded yet".to_string(),
            ));
        }
        let token = self
            .state
            .token()
            .ok_or_else(|| MutationError::Rejected("No active session".to_string()))?;

        match self.gateway.remove_booking(&token, booking_id).await {
            Ok(()) => {
                log::info!("✅ Reserva eliminada: {}", booking_id);
                self.state.remove_booking(booking_id);
                Ok(())
            }
            Err(err) => {
                log::error!("❌ Error eliminando reserva {}: {}", booking_id, err);
                Err(err)
            }
        }
    }

    /// Guardar la edición de una reserva; sustituye la entrada local solo
    /// con la versión confirmada que devuelve el backend.
    pub async fn edit_booking(
        &self,
        booking_id: &str,
        reserve_date: DateTime<Utc>,
        restaurant_id: &str,
    ) -> Result<(), MutationError> {
        if !self.state.get_view_state().is_ready() {
            return Err(MutationError::Rejected(
                "Bookings are not loaded yet".to_string(),
            ));
        }
        let token = self
            .state
            .token()
            .ok_or_else(|| MutationError::Rejected("No active session".to_string()))?;

        match self
            .gateway
            .edit_booking(&token, booking_id, reserve_date, restaurant_id)
            .await
        {
            Ok(updated) => {
                log::info!("✅ Reserva actualizada: {}", updated.id);
                self.state.replace_booking(updated);
                Ok(())
            }
            Err(err) => {
                log::error!("❌ Error actualizando reserva {}: {}", booking_id, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::TimeZone;

    use crate::models::booking::{Booking, BookingUser};
    use crate::models::error::{FetchError, SessionError};
    use crate::models::restaurant::Restaurant;
    use crate::models::session::{Session, SessionUser};

    /// Gateway de prueba: respuestas fijas + contadores de llamadas compartidos
    #[derive(Clone)]
    struct MockGateway {
        session_result: Rc<RefCell<Result<Session, SessionError>>>,
        fetch_result: Rc<RefCell<Result<Vec<Booking>, FetchError>>>,
        remove_result: Rc<RefCell<Result<(), MutationError>>>,
        edit_result: Rc<RefCell<Result<Booking, MutationError>>>,
        session_calls: Rc<Cell<usize>>,
        fetch_calls: Rc<Cell<usize>>,
        remove_calls: Rc<Cell<usize>>,
        edit_calls: Rc<Cell<usize>>,
        last_token: Rc<RefCell<Option<String>>>,
        last_removed: Rc<RefCell<Option<String>>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                session_result: Rc::new(RefCell::new(Ok(Session::default()))),
                fetch_result: Rc::new(RefCell::new(Ok(Vec::new()))),
                remove_result: Rc::new(RefCell::new(Ok(()))),
                edit_result: Rc::new(RefCell::new(Err(MutationError::Rejected(
                    "edit not scripted".to_string(),
                )))),
                session_calls: Rc::new(Cell::new(0)),
                fetch_calls: Rc::new(Cell::new(0)),
                remove_calls: Rc::new(Cell::new(0)),
                edit_calls: Rc::new(Cell::new(0)),
                last_token: Rc::new(RefCell::new(None)),
                last_removed: Rc::new(RefCell::new(None)),
            }
        }

        fn with_session(self, session: Session) -> Self {
            *self.session_result.borrow_mut() = Ok(session);
            self
        }

        fn with_session_error(self, detail: &str) -> Self {
            *self.session_result.borrow_mut() = Err(SessionError::new(detail));
            self
        }

        fn with_bookings(self, bookings: Vec<Booking>) -> Self {
            *self.fetch_result.borrow_mut() = Ok(bookings);
            self
        }

        fn with_fetch_error(self, err: FetchError) -> Self {
            *self.fetch_result.borrow_mut() = Err(err);
            self
        }

        fn with_remove_error(self, err: MutationError) -> Self {
            *self.remove_result.borrow_mut() = Err(err);
            self
        }

        fn with_edit_result(self, result: Result<Booking, MutationError>) -> Self {
            *self.edit_result.borrow_mut() = result;
            self
        }
    }

    impl BookingGateway for MockGateway {
        async fn resolve_session(&self) -> Result<Session, SessionError> {
            self.session_calls.set(self.session_calls.get() + 1);
            self.session_result.borrow().clone()
        }

        async fn fetch_bookings(&self, token: &str) -> Result<Vec<Booking>, FetchError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            *self.last_token.borrow_mut() = Some(token.to_string());
            self.fetch_result.borrow().clone()
        }

        async fn remove_booking(
            &self,
            token: &str,
            booking_id: &str,
        ) -> Result<(), MutationError> {
            self.remove_calls.set(self.remove_calls.get() + 1);
            *self.last_token.borrow_mut() = Some(token.to_string());
            *self.last_removed.borrow_mut() = Some(booking_id.to_string());
            self.remove_result.borrow().clone()
        }

        async fn edit_booking(
            &self,
            token: &str,
            _booking_id: &str,
            _reserve_date: DateTime<Utc>,
            _restaurant_id: &str,
        ) -> Result<Booking, MutationError> {
            self.edit_calls.set(self.edit_calls.get() + 1);
            *self.last_token.borrow_mut() = Some(token.to_string());
            self.edit_result.borrow().clone()
        }
    }

    fn session_with_token(name: &str, token: &str) -> Session {
        Session {
            user: Some(SessionUser {
                name: name.to_string(),
                token: Some(token.to_string()),
            }),
        }
    }

    fn booking(id: &str, restaurant_name: Option<&str>) -> Booking {
        Booking {
            id: id.to_string(),
            reserve_date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            user: Some(BookingUser {
                name: "A".to_string(),
            }),
            restaurant: restaurant_name.map(|name| Restaurant {
                id: "r1".to_string(),
                name: name.to_string(),
                address: None,
                phone: None,
                picture: None,
            }),
        }
    }

    #[tokio::test]
    async fn session_without_token_reaches_unauthenticated_and_never_fetches() {
        let gateway = MockGateway::new().with_session(Session {
            user: Some(SessionUser {
                name: "A".to_string(),
                token: None,
            }),
        });
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(state.get_view_state(), BookingViewState::Unauthenticated);
        assert_eq!(gateway.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn anonymous_session_reaches_unauthenticated() {
        let gateway = MockGateway::new();
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(state.get_view_state(), BookingViewState::Unauthenticated);
        assert_eq!(gateway.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn empty_fetch_renders_empty_ready_with_a_single_request() {
        let gateway = MockGateway::new().with_session(session_with_token("A", "t1"));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(state.get_view_state(), BookingViewState::Ready(Vec::new()));
        assert_eq!(gateway.session_calls.get(), 1);
        assert_eq!(gateway.fetch_calls.get(), 1);
    }

    #[tokio::test]
    async fn fetch_uses_the_resolved_token() {
        let gateway = MockGateway::new().with_session(session_with_token("A", "t1"));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(gateway.last_token.borrow().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn session_http_error_reaches_error_state_without_fetching() {
        let gateway = MockGateway::new().with_session_error("HTTP 500: Internal Server Error");
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(
            state.get_view_state(),
            BookingViewState::Error("Failed to fetch session".to_string())
        );
        assert_eq!(gateway.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_preserves_the_message_for_display() {
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_fetch_error(FetchError::Http {
                status: 503,
                status_text: "Service Unavailable".to_string(),
            });
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(
            state.get_view_state(),
            BookingViewState::Error("HTTP 503: Service Unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn malformed_payload_surfaces_the_format_message() {
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_fetch_error(FetchError::Format(
                "invalid type: map, expected a sequence".to_string(),
            ));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        assert_eq!(
            state.get_view_state(),
            BookingViewState::Error("Bookings are not in the correct format".to_string())
        );
    }

    #[tokio::test]
    async fn resolving_the_session_twice_yields_the_same_state() {
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(vec![booking("b1", Some("Cafe"))]);
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;
        let first = state.get_view_state();
        viewmodel.load().await;
        let second = state.get_view_state();

        assert_eq!(first, second);
        assert_eq!(gateway.session_calls.get(), 2);
        assert_eq!(gateway.fetch_calls.get(), 2);
    }

    #[tokio::test]
    async fn successful_removal_removes_only_the_matching_booking() {
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(vec![
                booking("b1", Some("Cafe")),
                booking("b2", Some("Sushi Ten")),
                booking("b3", None),
            ]);
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());
        viewmodel.load().await;

        let result = viewmodel.remove_booking("b2").await;

        assert!(result.is_ok());
        let current = state.get_view_state();
        assert_eq!(
            current.bookings(),
            &[booking("b1", Some("Cafe")), booking("b3", None)]
        );
        assert_eq!(gateway.last_removed.borrow().as_deref(), Some("b2"));
    }

    #[tokio::test]
    async fn failed_removal_leaves_the_list_unchanged() {
        let original = vec![booking("b1", Some("Cafe")), booking("b2", None)];
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(original.clone())
            .with_remove_error(MutationError::Rejected("HTTP 403: Forbidden".to_string()));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());
        viewmodel.load().await;

        let result = viewmodel.remove_booking("b1").await;

        assert_eq!(
            result,
            Err(MutationError::Rejected("HTTP 403: Forbidden".to_string()))
        );
        assert_eq!(state.get_view_state().bookings(), original.as_slice());
    }

    #[tokio::test]
    async fn removal_is_rejected_before_the_list_is_ready() {
        let gateway = MockGateway::new();
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        let result = viewmodel.remove_booking("b1").await;

        assert!(result.is_err());
        assert_eq!(gateway.remove_calls.get(), 0);
    }

    #[tokio::test]
    async fn removal_without_a_held_token_is_rejected() {
        let gateway = MockGateway::new();
        let state = BookingListState::new();
        // Lista lista pero sin sesión: la mutación no debe salir al backend
        state.set_view_state(BookingViewState::Ready(vec![booking("b1", None)]));
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        let result = viewmodel.remove_booking("b1").await;

        assert!(result.is_err());
        assert_eq!(gateway.remove_calls.get(), 0);
        assert_eq!(state.get_view_state().bookings().len(), 1);
    }

    #[tokio::test]
    async fn cafe_scenario_renders_one_card_then_removes_it() {
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(vec![booking("b1", Some("Cafe"))]);
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());

        viewmodel.load().await;

        let current = state.get_view_state();
        assert_eq!(current.bookings().len(), 1);
        assert_eq!(
            current.bookings()[0]
                .restaurant
                .as_ref()
                .map(|r| r.name.as_str()),
            Some("Cafe")
        );

        let result = viewmodel.remove_booking("b1").await;

        assert!(result.is_ok());
        assert_eq!(state.get_view_state(), BookingViewState::Ready(Vec::new()));
        assert_eq!(gateway.last_token.borrow().as_deref(), Some("t1"));
        assert_eq!(gateway.last_removed.borrow().as_deref(), Some("b1"));
    }

    #[tokio::test]
    async fn successful_edit_replaces_the_entry_with_the_confirmed_version() {
        let mut updated = booking("b1", Some("Cafe"));
        updated.reserve_date = Utc.with_ymd_and_hms(2024, 2, 2, 20, 0, 0).unwrap();

        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(vec![booking("b1", Some("Cafe")), booking("b2", None)])
            .with_edit_result(Ok(updated.clone()));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());
        viewmodel.load().await;

        let result = viewmodel
            .edit_booking("b1", updated.reserve_date, "r1")
            .await;

        assert!(result.is_ok());
        assert_eq!(
            state.get_view_state().bookings(),
            &[updated, booking("b2", None)]
        );
        assert_eq!(gateway.edit_calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_edit_keeps_the_list_and_returns_the_error() {
        let original = vec![booking("b1", Some("Cafe"))];
        let gateway = MockGateway::new()
            .with_session(session_with_token("A", "t1"))
            .with_bookings(original.clone())
            .with_edit_result(Err(MutationError::Rejected(
                "Failed to update Booking".to_string(),
            )));
        let state = BookingListState::new();
        let viewmodel = BookingViewModel::new(gateway.clone(), state.clone());
        viewmodel.load().await;

        let result = viewmodel
            .edit_booking("b1", Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap(), "r1")
            .await;

        assert_eq!(
            result,
            Err(MutationError::Rejected("Failed to update Booking".to_string()))
        );
        assert_eq!(state.get_view_state().bookings(), original.as_slice());
    }
}
