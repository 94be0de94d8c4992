//! Contact command handler
//!
//! Handles: contact

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::{reply_with_menu, SlashCommandHandler};

/// Starts a contact request and shows the share button
pub struct ContactHandler;

#[async_trait]
impl SlashCommandHandler for ContactHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["contact"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let reply = ctx.request_contact(command.user.id.0);
        reply_with_menu(serenity_ctx, command, reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_handler_commands() {
        assert_eq!(ContactHandler.command_names(), &["contact"]);
    }
}
