use serde::{Deserialize, Serialize};

/// One bookable hour of the day. Ids are ordered chronologically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: u32,
    pub label: String,
    /// Booked by something outside the ledger.
    pub is_booked: bool,
}

/// A catalog slot as seen for one court on one date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotAvailability {
    pub id: u32,
    pub label: String,
    pub booked: bool,
}
