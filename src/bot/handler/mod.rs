use serenity::all::{Context, EventHandler, GuildId, Interaction, Reaction, Ready};
use serenity::async_trait;

use crate::service::game::{pacer::RevealPacer, GameService};

pub mod interaction;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub game: GameService,
    pub guild_id: GuildId,
    pub pacer: RevealPacer,
}

impl Handler {
    pub fn new(game: GameService, guild_id: GuildId, pacer: RevealPacer) -> Self {
        Self {
            game,
            guild_id,
            pacer,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.guild_id, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.game, &self.pacer, ctx, interaction).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(&self.game, &self.pacer, ctx, reaction).await;
    }
}
