use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use tokio::sync::watch;

use protraffic::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandHandler,
};
use protraffic::core::Config;
use protraffic::features::contact::DmReminderDispatcher;
use protraffic::features::followup::{
    FollowUpController, PendingActionStore, SweepScheduler, SystemClock,
};
use protraffic::message_components::MessageComponentHandler;

const ERROR_REPLY: &str = "❌ Произошла ошибка. Попробуйте ещё раз.";

struct Handler {
    command_handler: CommandHandler,
    component_handler: MessageComponentHandler,
    guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());

        // Guild commands update instantly, global ones may take up to an hour
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = self
                    .command_handler
                    .handle_slash_command(&ctx, &command)
                    .await
                {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );
                    let _ = command
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message.content(ERROR_REPLY).ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            Interaction::MessageComponent(component) => {
                if let Err(e) = self
                    .component_handler
                    .handle_component_interaction(&ctx, &component)
                    .await
                {
                    error!(
                        "Error handling component interaction '{}': {}",
                        component.data.custom_id, e
                    );
                    let _ = component
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message.content(ERROR_REPLY).ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            Interaction::ModalSubmit(modal) => {
                if let Err(e) = self
                    .component_handler
                    .handle_modal_submit(&ctx, &modal)
                    .await
                {
                    error!(
                        "Error handling modal submit '{}': {}",
                        modal.data.custom_id, e
                    );
                    let _ = modal
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message.content(ERROR_REPLY).ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            _ => {}
        }
    }
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => warn!("SIGINT received"),
                    _ = sigterm.recv() => warn!("SIGTERM received"),
                }
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                let _ = tokio::signal::ctrl_c().await;
                warn!("SIGINT received");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        warn!("Ctrl-C received");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Pro-traffic bot...");

    let store = Arc::new(PendingActionStore::new(Arc::new(SystemClock)));
    let followup = FollowUpController::new(store.clone());
    let command_handler =
        CommandHandler::new(CommandContext::new(followup, config.admin_channel_id));
    let component_handler = MessageComponentHandler::new(command_handler.context());

    // Guild-scoped registration in development mode
    let guild_id = config.discord_guild_id.map(GuildId);

    let handler = Handler {
        command_handler,
        component_handler,
        guild_id,
    };

    let intents = GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Start the follow-up scheduler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let dispatcher = Arc::new(DmReminderDispatcher::new(client.cache_and_http.http.clone()));
    let scheduler = SweepScheduler::new(store, dispatcher, config.followup);
    let scheduler_task = tokio::spawn(scheduler.run(shutdown_rx));

    // Disconnect from the gateway on Ctrl-C / SIGTERM; client.start() returns afterwards
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        info!("🛑 Shutting down, disconnecting from Discord gateway...");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Bot configured successfully. Connecting to Discord gateway...");
    let result = client.start().await;

    let _ = shutdown_tx.send(true);
    if let Err(e) = scheduler_task.await {
        error!("Follow-up scheduler task failed: {e}");
    }

    if let Err(why) = result {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("Bot shut down");
    Ok(())
}
