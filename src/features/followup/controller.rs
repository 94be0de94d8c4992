//! Entry points used by command and component handlers to start and settle
//! contact requests. Handlers never touch the store directly.

use log::info;
use std::sync::Arc;

use super::store::{PendingActionStore, RecipientId};

#[derive(Clone)]
pub struct FollowUpController {
    store: Arc<PendingActionStore>,
}

impl FollowUpController {
    pub fn new(store: Arc<PendingActionStore>) -> Self {
        Self { store }
    }

    /// The recipient was just asked for contact details
    ///
    /// Repeated requests while one is pending are folded into the first.
    pub fn on_request_issued(&self, recipient_id: RecipientId) {
        if self.store.try_create(recipient_id) {
            info!("⏳ Contact request pending for user {recipient_id}");
        }
    }

    /// The recipient shared their contact details
    ///
    /// Safe to call for recipients that were never asked.
    pub fn on_request_fulfilled(&self, recipient_id: RecipientId) {
        if self.store.cancel(recipient_id) {
            info!("✅ Contact request fulfilled by user {recipient_id}, follow-up cancelled");
        }
    }

    pub fn is_pending(&self, recipient_id: RecipientId) -> bool {
        self.store.contains(recipient_id)
    }

    pub fn pending_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::followup::clock::{Clock, ManualClock};
    use chrono::{TimeZone, Utc};

    fn controller() -> (Arc<ManualClock>, Arc<PendingActionStore>, FollowUpController) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap(),
        ));
        let store = Arc::new(PendingActionStore::new(clock.clone()));
        let controller = FollowUpController::new(store.clone());
        (clock, store, controller)
    }

    #[test]
    fn test_issue_then_fulfil() {
        let (_clock, _store, controller) = controller();

        controller.on_request_issued(42);
        assert!(controller.is_pending(42));

        controller.on_request_fulfilled(42);
        assert!(!controller.is_pending(42));
    }

    #[test]
    fn test_repeated_issue_coalesces() {
        let (clock, store, controller) = controller();
        let t0 = clock.now();

        controller.on_request_issued(42);
        clock.advance(chrono::Duration::minutes(5));
        controller.on_request_issued(42);

        assert_eq!(controller.pending_count(), 1);
        assert_eq!(store.get(42).map(|a| a.created_at), Some(t0));
    }

    #[test]
    fn test_unsolicited_fulfilment_is_noop() {
        let (_clock, _store, controller) = controller();

        controller.on_request_fulfilled(99);
        controller.on_request_fulfilled(99);
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_fresh_issue_after_fulfilment_restarts_timer() {
        let (clock, store, controller) = controller();

        controller.on_request_issued(1);
        controller.on_request_fulfilled(1);
        clock.advance(chrono::Duration::hours(2));
        controller.on_request_issued(1);

        assert_eq!(store.get(1).map(|a| a.created_at), Some(clock.now()));
    }
}
