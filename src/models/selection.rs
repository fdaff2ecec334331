use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::BookingError;
use crate::models::{ContactInfo, ContactUpdate, Court};

/// Outcome of a successful [`SelectionState::toggle_slot`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotToggle {
    Added,
    Removed,
}

/// The not-yet-committed reservation being put together by the user.
///
/// Slot ids are kept sorted. Insertions must keep the set a run of consecutive
/// ids; removals are unrestricted, so removing an interior slot can leave a
/// gap behind.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SelectionState {
    court: Option<Court>,
    date: Option<NaiveDate>,
    time_slot_ids: BTreeSet<u32>,
    contact: ContactInfo,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn court(&self) -> Option<&Court> {
        self.court.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot_ids(&self) -> &BTreeSet<u32> {
        &self.time_slot_ids
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    // Changing court or date keeps the slot set; callers view stale ids
    // through the availability index for the new (court, date).
    pub fn set_court(&mut self, court: Option<Court>) {
        self.court = court;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn update_contact(&mut self, update: ContactUpdate) {
        self.contact.apply(update);
    }

    pub fn toggle_slot(&mut self, slot_id: u32) -> Result<SlotToggle, BookingError> {
        if self.time_slot_ids.remove(&slot_id) {
            return Ok(SlotToggle::Removed);
        }

        let mut candidate = self.time_slot_ids.clone();
        candidate.insert(slot_id);
        if !is_contiguous(&candidate) {
            return Err(BookingError::InvalidSelection);
        }

        self.time_slot_ids = candidate;
        Ok(SlotToggle::Added)
    }

    pub fn clear_slots(&mut self) {
        self.time_slot_ids.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// True when the ids, ascending, step by exactly one.
pub fn is_contiguous(ids: &BTreeSet<u32>) -> bool {
    ids.iter()
        .zip(ids.iter().skip(1))
        .all(|(a, b)| b.checked_sub(*a) == Some(1))
}
