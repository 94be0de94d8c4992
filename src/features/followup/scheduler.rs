//! Periodic sweep that sends the one-time follow-up for stale contact requests.
//!
//! Delivery is best-effort: an entry is removed from the store before the
//! reminder is sent, and a failed send is logged and dropped. The loop stops
//! when the shutdown channel flips to `true` or its sender goes away; a sweep
//! already in progress runs to completion first.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::config::FollowUpConfig;
use super::dispatcher::NotificationDispatcher;
use super::store::PendingActionStore;

/// Outcome of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub drained: usize,
    pub delivered: usize,
    pub failed: usize,
}

pub struct SweepScheduler {
    store: Arc<PendingActionStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    config: FollowUpConfig,
}

impl SweepScheduler {
    pub fn new(
        store: Arc<PendingActionStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        config: FollowUpConfig,
    ) -> Self {
        Self {
            store,
            dispatcher,
            config,
        }
    }

    /// Drain expired entries and notify each recipient once
    ///
    /// The store is not locked while the dispatcher runs.
    pub async fn sweep(&self) -> SweepReport {
        let now = self.store.now();
        let expired = self.store.drain_expired(self.config.ttl, now);

        let mut report = SweepReport {
            drained: expired.len(),
            ..SweepReport::default()
        };

        for recipient_id in expired {
            match self.dispatcher.notify(recipient_id).await {
                Ok(()) => {
                    debug!("Follow-up reminder delivered to {recipient_id}");
                    report.delivered += 1;
                }
                Err(e) => {
                    warn!("Failed to deliver follow-up reminder to {recipient_id}: {e}");
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Sweep every `tick_interval` until shutdown is signalled
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let period = self.config.tick_interval;
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Follow-up scheduler started (interval: {:?}, ttl: {:?})",
            period, self.config.ttl
        );

        loop {
            let stop = *shutdown.borrow();
            if stop {
                break;
            }

            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() {
                        debug!("Shutdown sender dropped, stopping follow-up scheduler");
                        break;
                    }
                }
                _ = interval.tick() => {
                    let report = self.sweep().await;
                    if report.drained > 0 {
                        info!(
                            "📬 Follow-up sweep: {} expired, {} delivered, {} failed, {} still pending",
                            report.drained,
                            report.delivered,
                            report.failed,
                            self.store.len()
                        );
                    }
                }
            }
        }

        info!(
            "Follow-up scheduler stopped ({} pending entries discarded)",
            self.store.len()
        );
    }
}
