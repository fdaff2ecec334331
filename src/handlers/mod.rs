pub mod bookings;
pub mod courts;
pub mod health;
pub mod selection;

use std::sync::Arc;

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/courts", get(courts::list_courts))
        .route("/api/courts/:id", get(courts::get_court))
        .route("/api/courts/:id/slots", get(courts::court_slots))
        .route("/api/time-slots", get(courts::list_time_slots))
        .route(
            "/api/selection",
            get(selection::get_selection).delete(selection::reset_selection),
        )
        .route("/api/selection/court", put(selection::set_court))
        .route("/api/selection/date", put(selection::set_date))
        .route(
            "/api/selection/slots/:slot_id/toggle",
            post(selection::toggle_slot),
        )
        .route("/api/selection/slots", delete(selection::clear_slots))
        .route("/api/selection/contact", patch(selection::update_contact))
        .route("/api/bookings", get(bookings::list_bookings))
        .route("/api/bookings/confirm", post(bookings::confirm_booking))
        .with_state(state)
}
