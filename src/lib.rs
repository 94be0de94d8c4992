// Core layer - configuration
pub mod core;

// Features layer - follow-up scheduler, menu, contact flow
pub mod features;

// Interaction layer - buttons and modals
pub mod message_components;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::Config;

pub use features::{
    DmReminderDispatcher, FollowUpConfig, FollowUpController, MenuAction, SweepScheduler,
};
