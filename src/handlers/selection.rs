use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ContactInfo, ContactUpdate, Court, SelectionState, SlotToggle};
use crate::services::{booking, catalog};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SelectedSlot {
    pub id: u32,
    pub label: String,
    /// Taken on the currently selected court and date.
    pub booked: bool,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    court: Option<Court>,
    date: Option<String>,
    time_slots: Vec<SelectedSlot>,
    contact: ContactInfo,
    total_price: Option<u32>,
}

pub(crate) fn slot_label(state: &AppState, id: u32) -> String {
    catalog::find_slot(&state.time_slots, id)
        .map(|s| s.label.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn snapshot(state: &AppState, selection: &SelectionState) -> SelectionResponse {
    let date = selection.date().map(booking::format_date);
    let court_id = selection.court().map(|c| c.id);

    let time_slots = selection
        .time_slot_ids()
        .iter()
        .map(|id| SelectedSlot {
            id: *id,
            label: slot_label(state, *id),
            booked: match (court_id, date.as_deref()) {
                (Some(court_id), Some(date)) => state.ledger.is_booked(court_id, date, *id),
                _ => false,
            },
        })
        .collect();

    SelectionResponse {
        court: selection.court().cloned(),
        date,
        time_slots,
        contact: selection.contact().clone(),
        total_price: selection
            .court()
            .map(|c| booking::quote(c, selection.time_slot_ids().len())),
    }
}

// GET /api/selection
pub async fn get_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let selection = state.selection();
    Json(snapshot(&state, &selection))
}

// PUT /api/selection/court
#[derive(Deserialize)]
pub struct SetCourtRequest {
    pub court_id: Option<u32>,
}

pub async fn set_court(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetCourtRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let court = match body.court_id {
        Some(id) => Some(
            catalog::find_court(&state.courts, id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("court {id}")))?,
        ),
        None => None,
    };

    let mut selection = state.selection();
    selection.set_court(court);
    Ok(Json(snapshot(&state, &selection)))
}

// PUT /api/selection/date
#[derive(Deserialize)]
pub struct SetDateRequest {
    pub date: Option<String>,
}

pub async fn set_date(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetDateRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let date = match body.date {
        Some(raw) => Some(
            booking::parse_date(&raw)
                .ok_or_else(|| AppError::BadRequest(format!("invalid date: {raw}")))?,
        ),
        None => None,
    };

    let mut selection = state.selection();
    selection.set_date(date);
    Ok(Json(snapshot(&state, &selection)))
}

// POST /api/selection/slots/:slot_id/toggle
#[derive(Serialize)]
pub struct ToggleResponse {
    result: SlotToggle,
    selection: SelectionResponse,
}

pub async fn toggle_slot(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<u32>,
) -> Result<Json<ToggleResponse>, AppError> {
    if catalog::find_slot(&state.time_slots, slot_id).is_none() {
        return Err(AppError::NotFound(format!("time slot {slot_id}")));
    }

    let mut selection = state.selection();
    let result = selection.toggle_slot(slot_id).map_err(|e| {
        tracing::debug!(slot_id, error = %e, "slot toggle rejected");
        e
    })?;

    Ok(Json(ToggleResponse {
        result,
        selection: snapshot(&state, &selection),
    }))
}

// DELETE /api/selection/slots
pub async fn clear_slots(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let mut selection = state.selection();
    selection.clear_slots();
    Json(snapshot(&state, &selection))
}

// PATCH /api/selection/contact
pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContactUpdate>,
) -> Json<SelectionResponse> {
    let mut selection = state.selection();
    selection.update_contact(body);
    Json(snapshot(&state, &selection))
}

// DELETE /api/selection
pub async fn reset_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let mut selection = state.selection();
    selection.reset();
    Json(snapshot(&state, &selection))
}
