// --- File: crates/calbook_scheduling/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, cancel_booking_handler, get_public_config_handler, get_slots_handler,
    list_bookings_handler, SchedulingState,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all scheduling routes. The backend service
/// nests this under /api.
pub fn routes(state: Arc<SchedulingState>) -> Router {
    Router::new()
        .route("/config", get(get_public_config_handler))
        .route("/slots", get(get_slots_handler))
        .route("/book", post(book_slot_handler))
        .route("/bookings", get(list_bookings_handler))
        .route("/bookings/{id}", delete(cancel_booking_handler))
        .with_state(state)
}
