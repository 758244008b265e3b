use tokio::sync::broadcast;

use crate::models::StatusChange;

pub const STATUS_CHANGE_EVENT: &str = "status_change";

pub fn publish_status_change(tx: &broadcast::Sender<StatusChange>, change: StatusChange) {
    // No subscribers is the normal case when no dashboard is open
    if tx.send(change).is_err() {
        tracing::trace!("no dashboard subscribed to status changes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    #[tokio::test]
    async fn test_subscribers_receive_changes() {
        let (tx, mut rx) = broadcast::channel(4);
        let change = StatusChange {
            booking_id: 2,
            from: BookingStatus::Pending,
            to: BookingStatus::Confirmed,
        };

        publish_status_change(&tx, change.clone());
        assert_eq!(rx.recv().await.unwrap(), change);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let (tx, rx) = broadcast::channel::<StatusChange>(4);
        drop(rx);
        publish_status_change(
            &tx,
            StatusChange {
                booking_id: 1,
                from: BookingStatus::Confirmed,
                to: BookingStatus::Completed,
            },
        );
    }
}
