use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{
        command::{start_event, START_COMMAND},
        platform::SerenityPlatform,
    },
    service::game::{pacer::RevealPacer, GameService},
};

/// Handles slash command interactions.
///
/// Only the `start` command is known; anything else is logged and ignored.
pub async fn handle_interaction(
    game: &GameService,
    pacer: &RevealPacer,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != START_COMMAND {
        tracing::warn!("Received unknown command: {}", command.data.name);
        return;
    }

    tracing::debug!(
        "Start command from {} in channel {}",
        command.user.id,
        command.channel_id
    );

    let event = start_event(&command);
    let platform = SerenityPlatform::for_command(Arc::clone(&ctx.http), command);

    game.dispatch(&platform, pacer, event).await;
}
