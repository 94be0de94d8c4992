use anyhow::Result;
use log::{error, info, warn};
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::CommandContext;
use crate::features::contact::{
    forward_to_admin, show_contact_form, ContactSubmission, CONTACT_MODAL_ID,
};
use crate::features::menu::{self, content, MenuAction, MenuReply};

/// Handler for button presses and modal submissions
pub struct MessageComponentHandler {
    context: Arc<CommandContext>,
}

impl MessageComponentHandler {
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }

    /// Route a button press to its menu action
    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        let user_id = interaction.user.id;

        info!("Processing component interaction: {custom_id} from user: {user_id}");

        match MenuAction::from_custom_id(custom_id) {
            Some(MenuAction::RequestContact) => {
                let reply = self.context.request_contact(user_id.0);
                self.send_reply(ctx, interaction, reply).await?;
            }
            Some(MenuAction::ShareContact) => {
                show_contact_form(&ctx.http, interaction).await?;
            }
            Some(action) => match menu::render(action) {
                Some(reply) => self.send_reply(ctx, interaction, reply).await?,
                None => self.send_unknown(ctx, interaction).await?,
            },
            None => {
                warn!("Unknown component id {custom_id} from user {user_id}");
                self.send_unknown(ctx, interaction).await?;
            }
        }

        Ok(())
    }

    /// Handle modal submit interactions
    pub async fn handle_modal_submit(
        &self,
        ctx: &Context,
        interaction: &ModalSubmitInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        let user_id = interaction.user.id;

        info!("Processing modal submit: {custom_id} from user: {user_id}");

        if custom_id == CONTACT_MODAL_ID {
            self.handle_contact_submission(ctx, interaction).await
        } else {
            interaction
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| {
                            message.content(content::UNKNOWN_ACTION).ephemeral(true)
                        })
                })
                .await?;
            Ok(())
        }
    }

    /// Contact details were shared: settle the pending request, then notify the admins
    async fn handle_contact_submission(
        &self,
        ctx: &Context,
        interaction: &ModalSubmitInteraction,
    ) -> Result<()> {
        let user_id = interaction.user.id.0;

        let Some(submission) = ContactSubmission::from_modal(interaction) else {
            interaction
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| {
                            message.content(content::CONTACT_MISSING).ephemeral(true)
                        })
                })
                .await?;
            return Ok(());
        };

        self.context.followup.on_request_fulfilled(user_id);

        if let Err(e) = forward_to_admin(
            &ctx.http,
            self.context.admin_channel,
            &submission,
            user_id,
            &interaction.user.tag(),
        )
        .await
        {
            error!("{e:#}");
        }

        interaction
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content(content::CONTACT_THANKS))
            })
            .await?;

        Ok(())
    }

    async fn send_reply(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        reply: MenuReply,
    ) -> Result<()> {
        interaction
            .create_interaction_response(&ctx.http, |response| {
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

    async fn send_unknown(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        interaction
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| {
                        message.content(content::UNKNOWN_ACTION).ephemeral(true)
                    })
            })
            .await?;
        Ok(())
    }
}
