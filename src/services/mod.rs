pub mod booking_store;
pub mod calendar;
pub mod catalog;
pub mod events;
