use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;

use crate::features::followup::{NotificationDispatcher, RecipientId};
use crate::features::menu::{buttons, content};

/// Sends the follow-up reminder as a direct message
pub struct DmReminderDispatcher {
    http: Arc<Http>,
}

impl DmReminderDispatcher {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationDispatcher for DmReminderDispatcher {
    async fn notify(&self, recipient_id: RecipientId) -> Result<()> {
        let http: &Http = &self.http;
        let dm = UserId(recipient_id)
            .create_dm_channel(http)
            .await
            .with_context(|| format!("Could not open DM channel with {recipient_id}"))?;

        dm.send_message(http, |m| {
            m.content(content::REMINDER_TEXT)
                .set_components(buttons::reminder_buttons())
        })
        .await
        .with_context(|| format!("Could not send reminder to {recipient_id}"))?;

        Ok(())
    }
}
