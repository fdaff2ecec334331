use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::Booking;
use crate::services::availability;

/// Append-only, insertion-ordered store of confirmed bookings.
///
/// All writers go through the same mutex, so a check against the entries and
/// the append that follows it can be done as one critical section.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    entries: Mutex<Vec<Booking>>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger holding the sample bookings the app starts with.
    pub fn with_sample_bookings() -> Self {
        Self {
            entries: Mutex::new(sample_bookings()),
        }
    }

    pub fn append(&self, bookings: Vec<Booking>) {
        self.entries().extend(bookings);
    }

    pub fn all(&self) -> Vec<Booking> {
        self.entries().clone()
    }

    pub fn find_by_email(&self, email: &str) -> Vec<Booking> {
        let needle = email.to_lowercase();
        self.entries()
            .iter()
            .filter(|b| b.email.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    pub fn is_booked(&self, court_id: u32, date: &str, time_slot_id: u32) -> bool {
        availability::is_booked(&self.entries(), court_id, date, time_slot_id)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are never rewritten in place, so a poisoned lock still guards a
    // consistent vector.
    pub(crate) fn entries(&self) -> MutexGuard<'_, Vec<Booking>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            court_id: 1,
            date: "2025-05-15".to_string(),
            time_slot_id: 3,
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
        },
        Booking {
            court_id: 2,
            date: "2025-05-16".to_string(),
            time_slot_id: 5,
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
        },
    ]
}
