use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recoverable outcomes of selecting and confirming a reservation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("please select a court, date, and time slot")]
    IncompleteSelection,

    #[error("please provide your name, email, and phone number")]
    MissingContactInfo,

    #[error("time slot {slot_id} on court {court_id} is already booked for {date}, please select another time")]
    SlotConflict {
        court_id: u32,
        date: String,
        slot_id: u32,
    },

    #[error("select consecutive time slots only")]
    InvalidSelection,
}

impl BookingError {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::IncompleteSelection => "incomplete_selection",
            BookingError::MissingContactInfo => "missing_contact_info",
            BookingError::SlotConflict { .. } => "slot_conflict",
            BookingError::InvalidSelection => "invalid_selection",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::Booking(BookingError::SlotConflict { .. }) => {
                (StatusCode::CONFLICT, "slot_conflict")
            }
            AppError::Booking(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.kind()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };

        let mut body = serde_json::json!({ "error": self.to_string(), "kind": kind });
        if let AppError::Booking(BookingError::SlotConflict { slot_id, .. }) = &self {
            body["slot_id"] = serde_json::json!(slot_id);
        }
        (status, axum::Json(body)).into_response()
    }
}
