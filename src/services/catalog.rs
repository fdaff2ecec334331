use crate::models::{Court, TimeSlot, VenueType};

const FIRST_HOUR: u32 = 7;
const LAST_HOUR: u32 = 21;

/// The daily schedule: one slot per hour from 7 AM through 9 PM, ids from 1.
pub fn generate_time_slots() -> Vec<TimeSlot> {
    (FIRST_HOUR..=LAST_HOUR)
        .enumerate()
        .map(|(idx, hour)| TimeSlot {
            id: idx as u32 + 1,
            label: hour_label(hour),
            is_booked: false,
        })
        .collect()
}

pub fn find_slot(slots: &[TimeSlot], id: u32) -> Option<&TimeSlot> {
    slots.iter().find(|s| s.id == id)
}

fn hour_label(hour: u32) -> String {
    let am_pm = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display}:00 {am_pm}")
}

pub fn default_courts() -> Vec<Court> {
    let court = |id: u32, venue: VenueType, description: &str, features: [&str; 4]| Court {
        id,
        name: format!("Court {id}"),
        venue,
        price_per_hour: 3000,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    };

    vec![
        court(
            1,
            VenueType::Indoor,
            "Our premium indoor court with professional-grade flooring and lighting.",
            ["Climate controlled", "Pro-grade net", "Seating area", "Water station"],
        ),
        court(
            2,
            VenueType::Indoor,
            "Spacious indoor court perfect for both casual play and competitive matches.",
            ["Climate controlled", "Pro-grade net", "Equipment rental", "Water station"],
        ),
        court(
            3,
            VenueType::Outdoor,
            "Beautiful outdoor court with excellent visibility and ample space.",
            ["Shaded viewing area", "Pro-grade net", "Night lighting", "Water station"],
        ),
        court(
            4,
            VenueType::Outdoor,
            "Newly resurfaced outdoor court with tournament-quality playing conditions.",
            ["Shaded viewing area", "Pro-grade net", "Night lighting", "Equipment rental"],
        ),
    ]
}

pub fn find_court(courts: &[Court], id: u32) -> Option<&Court> {
    courts.iter().find(|c| c.id == id)
}
