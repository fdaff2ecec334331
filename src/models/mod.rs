pub mod booking;
pub mod contact;
pub mod court;
pub mod selection;
pub mod time_slot;

pub use booking::Booking;
pub use contact::{ContactInfo, ContactUpdate};
pub use court::{Court, VenueType};
pub use selection::{SelectionState, SlotToggle};
pub use time_slot::{SlotAvailability, TimeSlot};
