use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// Splitting construction from `start_bot` lets the caller grab the shard
/// manager for shutdown before the client starts blocking.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Event handler wired to the game service
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    // Slash commands arrive with GUILDS, reactions need GUILD_MESSAGE_REACTIONS.
    // Neither is privileged
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects the client to Discord and runs until every shard has shut down.
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
