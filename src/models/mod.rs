pub mod amount;
pub mod booking;
pub mod catalog;
pub mod event;

pub use amount::Amount;
pub use booking::{Booking, BookingAction, BookingStats, BookingStatus, ParseStatusError, StatusFilter};
pub use catalog::{Category, Photo, ServiceOffering, ALL_CATEGORIES};
pub use event::StatusChange;
