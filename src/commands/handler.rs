//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;
use crate::features::menu::MenuReply;

/// Trait for slash command handlers
///
/// Handlers are registered with a CommandRegistry and dispatched by command name.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

/// Answer a slash command with a menu screen
pub async fn reply_with_menu(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    reply: MenuReply,
) -> Result<()> {
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message
                        .content(reply.content)
                        .set_components(reply.components)
                })
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry stores handlers as trait objects
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
