use serde::Serialize;

use super::BookingStatus;

/// Pushed to admin dashboards whenever a booking changes status.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub booking_id: u64,
    pub from: BookingStatus,
    pub to: BookingStatus,
}
