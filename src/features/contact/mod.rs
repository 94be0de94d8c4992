//! # Contact Feature
//!
//! Contact request form, forwarding of submissions to the admin channel and
//! the direct-message reminder sent when a request goes unanswered.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod form;
pub mod reminder;

pub use form::{forward_to_admin, show_contact_form, ContactSubmission, CONTACT_MODAL_ID};
pub use reminder::DmReminderDispatcher;
