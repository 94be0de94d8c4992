//! Shared context for command and component handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serenity::model::id::ChannelId;

use crate::features::followup::FollowUpController;
use crate::features::menu::{buttons, content, MenuReply};

/// State every handler may need
///
/// Holds the follow-up controller rather than the store itself, so handlers
/// can only start or settle contact requests.
#[derive(Clone)]
pub struct CommandContext {
    pub followup: FollowUpController,
    pub admin_channel: ChannelId,
}

impl CommandContext {
    pub fn new(followup: FollowUpController, admin_channel_id: u64) -> Self {
        Self {
            followup,
            admin_channel: ChannelId(admin_channel_id),
        }
    }

    /// Mark the user as asked for contact details and build the prompt
    pub fn request_contact(&self, user_id: u64) -> MenuReply {
        self.followup.on_request_issued(user_id);
        MenuReply {
            content: content::CONTACT_PROMPT,
            components: buttons::share_contact_button(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::followup::{PendingActionStore, SystemClock};
    use std::sync::Arc;

    #[test]
    fn test_request_contact_marks_user_pending() {
        let store = Arc::new(PendingActionStore::new(Arc::new(SystemClock)));
        let ctx = CommandContext::new(FollowUpController::new(store.clone()), 10);

        let reply = ctx.request_contact(77);
        assert_eq!(reply.content, content::CONTACT_PROMPT);
        assert!(store.contains(77));

        ctx.request_contact(77);
        assert_eq!(store.len(), 1);
    }
}
