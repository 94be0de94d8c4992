//! Menu command handlers
//!
//! Handles: start, about, faq

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::{reply_with_menu, SlashCommandHandler};
use crate::features::menu::{self, MenuAction};

/// Handler for the static menu screens
pub struct MenuHandler;

#[async_trait]
impl SlashCommandHandler for MenuHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "about", "faq"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let action = MenuAction::from_command(&command.data.name)
            .ok_or_else(|| anyhow!("Unknown menu command: {}", command.data.name))?;
        let reply = menu::render(action)
            .ok_or_else(|| anyhow!("Menu command {} has no static screen", command.data.name))?;

        debug!("Rendering {action:?} for user {}", command.user.id);
        reply_with_menu(serenity_ctx, command, reply).await
    }
}
