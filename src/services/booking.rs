use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::BookingError;
use crate::models::{Booking, Court, SelectionState};
use crate::services::availability;
use crate::services::ledger::ReservationLedger;

/// Turn the current selection into ledger entries, one per selected slot.
///
/// Checks run in a fixed order and the first failure is returned: incomplete
/// selection, missing contact details, then conflicts against the ledger in
/// ascending slot order. Either every slot is appended or none is. The
/// selection itself is left untouched; clearing it is up to the caller.
pub fn confirm(
    selection: &SelectionState,
    ledger: &ReservationLedger,
) -> Result<Vec<Booking>, BookingError> {
    let (court, date) = match (selection.court(), selection.date()) {
        (Some(court), Some(date)) if !selection.time_slot_ids().is_empty() => (court, date),
        _ => return Err(BookingError::IncompleteSelection),
    };

    let contact = selection.contact();
    if !contact.is_complete() {
        return Err(BookingError::MissingContactInfo);
    }

    let date = format_date(date);

    // Held until the new entries are in.
    let mut entries = ledger.entries();

    if let Some(slot_id) = selection
        .time_slot_ids()
        .iter()
        .copied()
        .find(|id| availability::is_booked(&entries, court.id, &date, *id))
    {
        return Err(BookingError::SlotConflict {
            court_id: court.id,
            date,
            slot_id,
        });
    }

    let bookings: Vec<Booking> = selection
        .time_slot_ids()
        .iter()
        .map(|slot_id| Booking {
            court_id: court.id,
            date: date.clone(),
            time_slot_id: *slot_id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        })
        .collect();

    entries.extend(bookings.iter().cloned());

    Ok(bookings)
}

/// The ledger key for a calendar date: `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Accepts a plain date, an RFC 3339 timestamp, or a local timestamp, and
/// keeps only the calendar date as written.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Total price of holding `court` for `slot_count` hours.
pub fn quote(court: &Court, slot_count: usize) -> u32 {
    court
        .price_per_hour
        .saturating_mul(u32::try_from(slot_count).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactUpdate, VenueType};

    fn court(id: u32) -> Court {
        Court {
            id,
            name: format!("Court {id}"),
            venue: VenueType::Indoor,
            price_per_hour: 3000,
            description: String::new(),
            features: vec![],
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn contact(name: &str, email: &str, phone: &str) -> ContactUpdate {
        ContactUpdate {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    fn selection(court_id: u32, day: &str, slots: &[u32]) -> SelectionState {
        let mut state = SelectionState::new();
        state.set_court(Some(court(court_id)));
        state.set_date(Some(date(day)));
        for id in slots {
            state.toggle_slot(*id).unwrap();
        }
        state.update_contact(contact("A", "a@x.com", "123"));
        state
    }

    fn existing(court_id: u32, day: &str, time_slot_id: u32) -> Booking {
        Booking {
            court_id,
            date: day.to_string(),
            time_slot_id,
            name: "Bob".to_string(),
            email: "bob@x.com".to_string(),
            phone: "555".to_string(),
        }
    }

    #[test]
    fn test_confirm_single_slot() {
        let ledger = ReservationLedger::new();
        let state = selection(1, "2025-06-01", &[9]);

        let bookings = confirm(&state, &ledger).unwrap();
        let expected = Booking {
            court_id: 1,
            date: "2025-06-01".to_string(),
            time_slot_id: 9,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "123".to_string(),
        };
        assert_eq!(bookings, vec![expected.clone()]);
        assert_eq!(ledger.all(), vec![expected.clone()]);
        assert_eq!(ledger.find_by_email("a@x.com"), vec![expected.clone()]);
        assert_eq!(ledger.find_by_email("A@X.COM"), vec![expected]);
    }

    #[test]
    fn test_confirm_multi_slot_appends_in_ascending_order() {
        let ledger = ReservationLedger::with_sample_bookings();
        let state = selection(2, "2025-06-01", &[6, 5, 7]);

        let bookings = confirm(&state, &ledger).unwrap();
        let slots: Vec<u32> = bookings.iter().map(|b| b.time_slot_id).collect();
        assert_eq!(slots, vec![5, 6, 7]);
        assert!(bookings.iter().all(|b| b.court_id == 2 && b.date == "2025-06-01"));

        let all = ledger.all();
        assert_eq!(all.len(), 5);
        assert_eq!(&all[2..], bookings.as_slice());
    }

    #[test]
    fn test_confirm_does_not_clear_selection() {
        let ledger = ReservationLedger::new();
        let state = selection(1, "2025-06-01", &[9]);
        confirm(&state, &ledger).unwrap();
        assert_eq!(state.time_slot_ids().len(), 1);
        assert!(state.court().is_some());
    }

    #[test]
    fn test_incomplete_selection() {
        let ledger = ReservationLedger::new();

        let mut no_court = selection(1, "2025-06-01", &[9]);
        no_court.set_court(None);
        assert_eq!(confirm(&no_court, &ledger), Err(BookingError::IncompleteSelection));

        let mut no_date = selection(1, "2025-06-01", &[9]);
        no_date.set_date(None);
        assert_eq!(confirm(&no_date, &ledger), Err(BookingError::IncompleteSelection));

        let no_slots = selection(1, "2025-06-01", &[]);
        assert_eq!(confirm(&no_slots, &ledger), Err(BookingError::IncompleteSelection));

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_incomplete_selection_wins_over_missing_contact() {
        let ledger = ReservationLedger::new();
        let mut state = SelectionState::new();
        state.toggle_slot(3).unwrap();
        assert_eq!(confirm(&state, &ledger), Err(BookingError::IncompleteSelection));
    }

    #[test]
    fn test_missing_contact_info() {
        let ledger = ReservationLedger::new();
        for update in [
            contact("", "a@x.com", "123"),
            contact("A", "   ", "123"),
            contact("A", "a@x.com", ""),
        ] {
            let mut state = selection(1, "2025-06-01", &[9]);
            state.update_contact(update);
            assert_eq!(confirm(&state, &ledger), Err(BookingError::MissingContactInfo));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_missing_contact_wins_over_conflict() {
        let ledger = ReservationLedger::new();
        ledger.append(vec![existing(1, "2025-06-01", 9)]);
        let mut state = selection(1, "2025-06-01", &[9]);
        state.update_contact(contact("A", "a@x.com", " "));
        assert_eq!(confirm(&state, &ledger), Err(BookingError::MissingContactInfo));
    }

    #[test]
    fn test_conflict_is_all_or_nothing() {
        let ledger = ReservationLedger::new();
        ledger.append(vec![existing(1, "2025-06-01", 4)]);
        let state = selection(1, "2025-06-01", &[3, 4, 5]);

        let err = confirm(&state, &ledger).unwrap_err();
        assert_eq!(
            err,
            BookingError::SlotConflict {
                court_id: 1,
                date: "2025-06-01".to_string(),
                slot_id: 4,
            }
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_conflict_reports_lowest_conflicting_slot() {
        let ledger = ReservationLedger::new();
        ledger.append(vec![existing(1, "2025-06-01", 5), existing(1, "2025-06-01", 4)]);
        let state = selection(1, "2025-06-01", &[3, 4, 5]);

        match confirm(&state, &ledger) {
            Err(BookingError::SlotConflict { slot_id, .. }) => assert_eq!(slot_id, 4),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_same_slot_other_court_or_date_is_free() {
        let ledger = ReservationLedger::new();
        ledger.append(vec![existing(2, "2025-06-01", 9), existing(1, "2025-06-02", 9)]);
        let state = selection(1, "2025-06-01", &[9]);
        assert!(confirm(&state, &ledger).is_ok());
    }

    #[test]
    fn test_second_confirm_of_same_selection_conflicts() {
        let ledger = ReservationLedger::new();
        let state = selection(1, "2025-06-01", &[9, 10]);
        confirm(&state, &ledger).unwrap();
        assert!(matches!(
            confirm(&state, &ledger),
            Err(BookingError::SlotConflict { slot_id: 9, .. })
        ));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_concurrent_confirms_book_slot_once() {
        let ledger = std::sync::Arc::new(ReservationLedger::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    let state = selection(1, "2025-06-01", &[9]);
                    confirm(&state, &ledger).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-06-01"), Some(date("2025-06-01")));
        assert_eq!(parse_date(" 2025-06-01 "), Some(date("2025-06-01")));
        assert_eq!(parse_date("2025-06-01T23:30:00Z"), Some(date("2025-06-01")));
        assert_eq!(parse_date("2025-06-01T01:00:00+05:30"), Some(date("2025-06-01")));
        assert_eq!(parse_date("2025-06-01T18:00:00"), Some(date("2025-06-01")));
        assert_eq!(parse_date("06/01/2025"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2025-01-09")), "2025-01-09");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote(&court(1), 0), 0);
        assert_eq!(quote(&court(1), 3), 9000);
    }
}
