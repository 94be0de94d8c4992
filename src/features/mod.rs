//! # Features
//!
//! - `followup`: pending contact requests and the reminder sweep
//! - `menu`: static screens and navigation buttons
//! - `contact`: contact form, admin forwarding, DM reminder delivery

pub mod contact;
pub mod followup;
pub mod menu;

pub use contact::DmReminderDispatcher;
pub use followup::{FollowUpConfig, FollowUpController, SweepScheduler};
pub use menu::MenuAction;
