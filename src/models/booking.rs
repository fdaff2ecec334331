use serde::{Deserialize, Serialize};

/// A single confirmed (court, date, slot) reservation. A multi-hour
/// reservation is stored as one record per slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub court_id: u32,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time_slot_id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Booking {
    pub fn occupies(&self, court_id: u32, date: &str, time_slot_id: u32) -> bool {
        self.court_id == court_id && self.date == date && self.time_slot_id == time_slot_id
    }
}
