//! Ready event handler for bot initialization.
//!
//! The ready event fires after the gateway handshake, and again after any
//! reconnect that needs a fresh session. Registering the guild command here is
//! idempotent, so repeated ready events are harmless.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Sets the bot's activity and registers the `start` command in the configured
/// guild. A failed registration is logged; the bot keeps running and still
/// handles reactions on games that were already announced.
///
/// # Arguments
/// - `guild_id` - Guild the bot serves
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(guild_id: GuildId, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("/start to gamble")));

    match guild_id
        .set_commands(&ctx.http, vec![command::register_start()])
        .await
    {
        Ok(commands) => tracing::info!(
            "Registered {} command(s) in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e),
    }
}
