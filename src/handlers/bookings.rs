use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, Court};
use crate::services::{booking, catalog};
use crate::state::AppState;

use super::selection::slot_label;

#[derive(Serialize)]
pub struct BookingResponse {
    court_id: u32,
    court_name: String,
    date: String,
    time_slot_id: u32,
    time_slot: String,
    name: String,
    email: String,
    phone: String,
}

fn booking_response(state: &AppState, b: Booking) -> BookingResponse {
    BookingResponse {
        court_name: catalog::find_court(&state.courts, b.court_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        time_slot: slot_label(state, b.time_slot_id),
        court_id: b.court_id,
        date: b.date,
        time_slot_id: b.time_slot_id,
        name: b.name,
        email: b.email,
        phone: b.phone,
    }
}

// POST /api/bookings/confirm
#[derive(Serialize)]
pub struct ConfirmationResponse {
    court: Court,
    date: String,
    time_slots: Vec<String>,
    total_price: u32,
    bookings: Vec<BookingResponse>,
}

pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let mut selection = state.selection();

    let bookings = booking::confirm(&selection, &state.ledger).map_err(|e| {
        tracing::info!(kind = e.kind(), error = %e, "booking rejected");
        e
    })?;

    // confirm only succeeds with a court and a date selected
    let court = selection
        .court()
        .cloned()
        .ok_or_else(|| AppError::BadRequest("no court selected".to_string()))?;
    let date = selection
        .date()
        .map(booking::format_date)
        .ok_or_else(|| AppError::BadRequest("no date selected".to_string()))?;

    tracing::info!(
        court_id = court.id,
        %date,
        slots = bookings.len(),
        "booking confirmed"
    );

    let response = ConfirmationResponse {
        total_price: booking::quote(&court, bookings.len()),
        time_slots: bookings
            .iter()
            .map(|b| slot_label(&state, b.time_slot_id))
            .collect(),
        bookings: bookings
            .into_iter()
            .map(|b| booking_response(&state, b))
            .collect(),
        court,
        date,
    };

    selection.reset();

    Ok(Json(response))
}

// GET /api/bookings?email=
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = match query.email {
        Some(email) if email.trim().is_empty() => {
            return Err(AppError::BadRequest(
                "enter the email you used for your booking".to_string(),
            ));
        }
        Some(email) => state.ledger.find_by_email(&email),
        None => state.ledger.all(),
    };

    Ok(Json(
        bookings
            .into_iter()
            .map(|b| booking_response(&state, b))
            .collect(),
    ))
}
