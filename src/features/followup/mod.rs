//! # Follow-up Feature
//!
//! Remembers users who were asked for contact details and sends them a single
//! reminder when they have not answered within the TTL.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! Flow: [`FollowUpController`] records and settles requests in the
//! [`PendingActionStore`]; [`SweepScheduler`] drains stale entries on every
//! tick and hands each recipient to a [`NotificationDispatcher`].

pub mod clock;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod scheduler;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::FollowUpConfig;
pub use controller::FollowUpController;
pub use dispatcher::NotificationDispatcher;
pub use scheduler::{SweepReport, SweepScheduler};
pub use store::{PendingAction, PendingActionStore, RecipientId};
