use anyhow::Result;
use log::{debug, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::registry::CommandRegistry;
use crate::features::menu::content;

/// Entry point for slash command interactions
#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        Self {
            context: Arc::new(context),
            registry: CommandRegistry::with_all_handlers(),
        }
    }

    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.context)
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let user_id = command.user.id;
        let guild_id = command
            .guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());

        info!(
            "[{request_id}] 📥 Slash command received | Command: {} | User: {user_id} | Guild: {guild_id}",
            command.data.name
        );

        match self.registry.get(&command.data.name) {
            Some(handler) => {
                debug!("[{request_id}] 🎯 Dispatching /{}", command.data.name);
                handler.handle(self.context(), ctx, command).await?;
                debug!("[{request_id}] ✅ /{} handled", command.data.name);
            }
            None => {
                warn!("[{request_id}] Unknown slash command: {}", command.data.name);
                command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.content(content::UNKNOWN_ACTION).ephemeral(true)
                            })
                    })
                    .await?;
            }
        }

        Ok(())
    }
}
