use crate::models::{Booking, SlotAvailability, TimeSlot};

/// Whether any booking already holds this court, date and slot.
pub fn is_booked(bookings: &[Booking], court_id: u32, date: &str, time_slot_id: u32) -> bool {
    bookings
        .iter()
        .any(|b| b.occupies(court_id, date, time_slot_id))
}

/// The catalog as seen for one court on one date.
pub fn slot_availability(
    slots: &[TimeSlot],
    bookings: &[Booking],
    court_id: u32,
    date: &str,
) -> Vec<SlotAvailability> {
    slots
        .iter()
        .map(|slot| SlotAvailability {
            id: slot.id,
            label: slot.label.clone(),
            booked: slot.is_booked || is_booked(bookings, court_id, date, slot.id),
        })
        .collect()
}
