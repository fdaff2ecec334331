use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Court, SlotAvailability, TimeSlot};
use crate::services::{availability, booking, catalog};
use crate::state::AppState;

// GET /api/courts
pub async fn list_courts(State(state): State<Arc<AppState>>) -> Json<Vec<Court>> {
    Json(state.courts.clone())
}

// GET /api/courts/:id
pub async fn get_court(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Court>, AppError> {
    catalog::find_court(&state.courts, id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("court {id}")))
}

// GET /api/time-slots
pub async fn list_time_slots(State(state): State<Arc<AppState>>) -> Json<Vec<TimeSlot>> {
    Json(state.time_slots.clone())
}

// GET /api/courts/:id/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct CourtSlotsResponse {
    court_id: u32,
    date: String,
    slots: Vec<SlotAvailability>,
}

pub async fn court_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<CourtSlotsResponse>, AppError> {
    let court = catalog::find_court(&state.courts, id)
        .ok_or_else(|| AppError::NotFound(format!("court {id}")))?;

    let raw = query
        .date
        .ok_or_else(|| AppError::BadRequest("date is required".to_string()))?;
    let date = booking::parse_date(&raw)
        .map(booking::format_date)
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {raw}")))?;

    let slots = availability::slot_availability(
        &state.time_slots,
        &state.ledger.all(),
        court.id,
        &date,
    );

    Ok(Json(CourtSlotsResponse {
        court_id: court.id,
        date,
        slots,
    }))
}
