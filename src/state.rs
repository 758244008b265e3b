use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::{Booking, BookingStatus, StatusChange};
use crate::services::booking_store::BookingStore;
use crate::services::catalog::Catalog;
use crate::services::events::publish_status_change;

pub struct AppState {
    pub store: Mutex<BookingStore>,
    pub catalog: Catalog,
    pub config: AppConfig,
    pub events_tx: broadcast::Sender<StatusChange>,
}

impl AppState {
    pub fn new(config: AppConfig, store: BookingStore, catalog: Catalog) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            store: Mutex::new(store),
            catalog,
            config,
            events_tx,
        }
    }

    // The store is only ever replaced wholesale, so a poisoned lock still
    // guards a valid snapshot.
    fn lock_store(&self) -> MutexGuard<'_, BookingStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn bookings(&self) -> Arc<[Booking]> {
        self.lock_store().snapshot()
    }

    pub fn booking(&self, id: u64) -> Option<Booking> {
        self.lock_store().get(id).cloned()
    }

    /// Applies a status transition and returns the updated booking, or `None`
    /// when no booking has that id. Setting the status a booking already has
    /// returns it unchanged, without logging or publishing an event.
    pub fn transition(&self, id: u64, status: BookingStatus) -> Option<Booking> {
        let (from, updated) = {
            let mut store = self.lock_store();
            let current = store.get(id)?;
            if current.status == status {
                return Some(current.clone());
            }
            let from = current.status;
            *store = store.transition_status(id, status);
            (from, store.get(id).cloned())
        };

        tracing::info!(booking_id = id, from = %from, to = %status, "booking status updated");
        publish_status_change(
            &self.events_tx,
            StatusChange {
                booking_id: id,
                from,
                to: status,
            },
        );
        updated
    }
}
