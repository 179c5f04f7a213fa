// --- File: crates/salon_booking/src/routes.rs ---

use crate::auth::admin_auth_middleware;
use crate::handlers::{
    add_closure_handler, block_slots_handler, book_handler, cancel_booking_handler,
    get_availability_handler, list_blocked_handler, list_bookings_handler,
    list_closures_handler, remove_closure_handler, unblock_slots_handler, BookingState,
};
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// All booking routes, relative to the `/api` nest.
///
/// Availability, booking and the closure list are public; everything else
/// goes through [`admin_auth_middleware`].
pub fn routes(state: Arc<BookingState>) -> Router {
    let public = Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/book", post(book_handler))
        .route("/closures", get(list_closures_handler));

    let admin = Router::new()
        .route("/bookings", get(list_bookings_handler))
        .route("/book/{id}", delete(cancel_booking_handler))
        .route("/closures", post(add_closure_handler))
        .route("/closures/{date}", delete(remove_closure_handler))
        .route(
            "/blocked",
            get(list_blocked_handler)
                .post(block_slots_handler)
                .delete(unblock_slots_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    public.merge(admin).with_state(state)
}
