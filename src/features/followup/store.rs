//! Keyed record of recipients with an outstanding contact request.
//!
//! Uses DashMap so creation, cancellation and draining for one recipient are
//! serialised on that recipient's shard while unrelated recipients proceed
//! concurrently. No entry is ever updated in place: it is inserted once and
//! removed once.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::clock::Clock;

/// Identifier of the user a follow-up is addressed to (Discord user id)
pub type RecipientId = u64;

/// A recipient that was asked for contact details and has not answered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub recipient_id: RecipientId,
    pub created_at: DateTime<Utc>,
}

impl PendingAction {
    /// Whether this entry has reached `ttl` at `now`
    ///
    /// An entry stamped after `now` is never expired.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(self.created_at).to_std() {
            Ok(age) => age >= ttl,
            Err(_) => false,
        }
    }
}

pub struct PendingActionStore {
    entries: DashMap<RecipientId, DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl PendingActionStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Insert a pending entry stamped with the current time unless one exists
    ///
    /// Returns `false` when the recipient is already pending; the original
    /// timestamp is kept.
    pub fn try_create(&self, recipient_id: RecipientId) -> bool {
        match self.entries.entry(recipient_id) {
            Entry::Occupied(_) => {
                debug!("Follow-up already pending for {recipient_id}, keeping original timer");
                false
            }
            Entry::Vacant(slot) => {
                let created_at = self.clock.now();
                slot.insert(created_at);
                debug!("Follow-up pending for {recipient_id} since {created_at}");
                true
            }
        }
    }

    /// Remove the recipient's entry; returns whether one existed
    pub fn cancel(&self, recipient_id: RecipientId) -> bool {
        let removed = self.entries.remove(&recipient_id).is_some();
        if removed {
            debug!("Follow-up cancelled for {recipient_id}");
        }
        removed
    }

    /// Remove and return every recipient whose entry is at least `ttl` old at `now`
    ///
    /// Each shard is locked while it is scanned, so an entry removed here can
    /// not also be removed by a concurrent drain or cancel.
    pub fn drain_expired(&self, ttl: Duration, now: DateTime<Utc>) -> Vec<RecipientId> {
        let mut drained = Vec::new();
        self.entries.retain(|&recipient_id, created_at| {
            let action = PendingAction {
                recipient_id,
                created_at: *created_at,
            };
            if action.is_expired(ttl, now) {
                drained.push(recipient_id);
                false
            } else {
                true
            }
        });
        drained
    }

    /// Snapshot of a recipient's entry, if any
    pub fn get(&self, recipient_id: RecipientId) -> Option<PendingAction> {
        self.entries.get(&recipient_id).map(|entry| PendingAction {
            recipient_id,
            created_at: *entry.value(),
        })
    }

    pub fn contains(&self, recipient_id: RecipientId) -> bool {
        self.entries.contains_key(&recipient_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current time according to the store's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
