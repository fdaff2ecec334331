use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::AppConfig;
use crate::models::{Court, SelectionState, TimeSlot};
use crate::services::catalog;
use crate::services::ReservationLedger;

pub struct AppState {
    pub config: AppConfig,
    pub courts: Vec<Court>,
    pub time_slots: Vec<TimeSlot>,
    pub ledger: ReservationLedger,
    pub selection: Mutex<SelectionState>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let ledger = if config.seed_sample_bookings {
            ReservationLedger::with_sample_bookings()
        } else {
            ReservationLedger::new()
        };

        Self {
            config,
            courts: catalog::default_courts(),
            time_slots: catalog::generate_time_slots(),
            ledger,
            selection: Mutex::new(SelectionState::new()),
        }
    }

    pub fn selection(&self) -> MutexGuard<'_, SelectionState> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
