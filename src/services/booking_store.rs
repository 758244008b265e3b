use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{Amount, Booking, BookingStats, BookingStatus, StatusFilter};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate booking id: {0}")]
    DuplicateId(u64),
}

/// Ordered booking records behind a shared immutable snapshot.
///
/// Every transition builds a new snapshot instead of touching the old one,
/// so anything still holding the previous `Arc` keeps a consistent view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStore {
    bookings: Arc<[Booking]>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self {
            bookings: Arc::from(Vec::new()),
        }
    }
}

impl BookingStore {
    pub fn new(bookings: Vec<Booking>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(bookings.len());
        for booking in &bookings {
            if !seen.insert(booking.id) {
                return Err(SeedError::DuplicateId(booking.id));
            }
        }
        Ok(Self {
            bookings: bookings.into(),
        })
    }

    pub fn snapshot(&self) -> Arc<[Booking]> {
        Arc::clone(&self.bookings)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: u64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Sets the status of booking `id`, leaving every other field untouched.
    ///
    /// Any status may be set from any other. An unknown id, or a booking
    /// already in `new_status`, is not an error: the returned store shares
    /// `self`'s snapshot.
    pub fn transition_status(&self, id: u64, new_status: BookingStatus) -> BookingStore {
        match self.get(id) {
            None => {
                tracing::debug!(booking_id = id, status = %new_status, "ignoring transition for unknown booking");
                return self.clone();
            }
            Some(b) if b.status == new_status => return self.clone(),
            Some(_) => {}
        }

        let bookings: Vec<Booking> = self
            .bookings
            .iter()
            .map(|b| {
                if b.id == id {
                    Booking {
                        status: new_status,
                        ..b.clone()
                    }
                } else {
                    b.clone()
                }
            })
            .collect();

        BookingStore {
            bookings: bookings.into(),
        }
    }

    pub fn confirm(&self, id: u64) -> BookingStore {
        self.transition_status(id, BookingStatus::Confirmed)
    }

    pub fn reject(&self, id: u64) -> BookingStore {
        self.transition_status(id, BookingStatus::Cancelled)
    }

    pub fn complete(&self, id: u64) -> BookingStore {
        self.transition_status(id, BookingStatus::Completed)
    }
}

pub fn filter_by_status(bookings: &[Booking], filter: StatusFilter) -> Vec<&Booking> {
    bookings.iter().filter(|b| filter.matches(b.status)).collect()
}

pub fn aggregate_stats(bookings: &[Booking]) -> BookingStats {
    let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

    BookingStats {
        total_clients: bookings.len(),
        total_earnings: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .map(|b| b.amount)
            .sum::<Amount>(),
        pending_count: count(BookingStatus::Pending),
        confirmed_count: count(BookingStatus::Confirmed),
    }
}

/// Confirmed bookings, earliest date first. Equal dates keep insertion order.
pub fn upcoming_confirmed(bookings: &[Booking]) -> Vec<&Booking> {
    let mut upcoming: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .collect();
    upcoming.sort_by_key(|b| b.date);
    upcoming
}

pub fn recent(bookings: &[Booking], limit: usize) -> &[Booking] {
    &bookings[..limit.min(bookings.len())]
}
