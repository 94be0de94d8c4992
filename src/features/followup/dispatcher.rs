use anyhow::Result;
use async_trait::async_trait;

use super::store::RecipientId;

/// Delivers the follow-up reminder to a recipient
///
/// Called by the sweep after the recipient's entry has already been removed,
/// so an error here means the reminder is dropped, not retried.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn notify(&self, recipient_id: RecipientId) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Records every call; fails for recipients listed in `failing`
    #[derive(Default)]
    pub struct RecordingDispatcher {
        pub calls: Mutex<Vec<RecipientId>>,
        pub failing: HashSet<RecipientId>,
    }

    impl RecordingDispatcher {
        pub fn failing_for(ids: &[RecipientId]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failing: ids.iter().copied().collect(),
            }
        }

        pub fn calls(&self) -> Vec<RecipientId> {
            self.calls.lock().unwrap().clone()
        }

        pub fn count_for(&self, recipient_id: RecipientId) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|&&id| id == recipient_id)
                .count()
        }
    }

    #[async_trait]
    impl NotificationDispatcher for RecordingDispatcher {
        async fn notify(&self, recipient_id: RecipientId) -> Result<()> {
            self.calls.lock().unwrap().push(recipient_id);
            if self.failing.contains(&recipient_id) {
                anyhow::bail!("recipient {recipient_id} has DMs closed");
            }
            Ok(())
        }
    }
}
