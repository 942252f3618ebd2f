//! Reaction handler feeding announcement reactions into the game.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Context, Reaction, ReactionType, UserId};

use crate::{
    bot::{identity, platform::SerenityPlatform},
    model::{player::Player, reaction::ReactionSymbol},
    service::game::{event::GameEvent, pacer::RevealPacer, GameService},
};

/// Handles a reaction being added to any message the bot can see.
///
/// Reactions by the bot itself (the affordances it attaches to announcements),
/// reactions outside a guild, and emoji the game doesn't use are dropped here.
/// Everything else goes to the game, which decides whether the message and the
/// reactor matter.
pub async fn handle_reaction_add(
    game: &GameService,
    pacer: &RevealPacer,
    ctx: Context,
    reaction: Reaction,
) {
    let Some(user_id) = reaction.user_id else {
        return;
    };

    if user_id == ctx.cache.current_user().id {
        return;
    }

    if reaction.guild_id.is_none() {
        return;
    }

    let Some(symbol) = reaction_symbol(&reaction.emoji) else {
        return;
    };

    let reactor = resolve_reactor(&ctx, &reaction, user_id).await;

    tracing::debug!(
        "{:?} reaction from {} on message {}",
        symbol,
        reactor.id,
        reaction.message_id
    );

    let platform = SerenityPlatform::new(Arc::clone(&ctx.http));
    let event = GameEvent::ReactionAdded {
        reactor,
        message_id: reaction.message_id.get(),
        symbol,
    };

    game.dispatch(&platform, pacer, event).await;
}

/// Maps a Discord reaction emoji onto a game symbol.
///
/// Custom guild emoji never match.
pub fn reaction_symbol(emoji: &ReactionType) -> Option<ReactionSymbol> {
    match emoji {
        ReactionType::Unicode(name) => ReactionSymbol::from_emoji(name),
        _ => None,
    }
}

/// Names the reacting user.
///
/// Guild reactions carry the member, which gives the nickname. Without it the
/// user is fetched, and if that fails too a placeholder name is used so the
/// reaction still counts.
async fn resolve_reactor(ctx: &Context, reaction: &Reaction, user_id: UserId) -> Player {
    if let Some(member) = &reaction.member {
        return identity::player_from_member(member);
    }

    match user_id.to_user(ctx).await {
        Ok(user) => identity::player_from_user(&user),
        Err(e) => {
            tracing::warn!("Failed to fetch user {} for reaction: {:?}", user_id, e);
            identity::unknown_player(user_id.get())
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::EmojiId;

    use super::*;

    #[test]
    fn unicode_reactions_map_to_symbols() {
        assert_eq!(
            reaction_symbol(&ReactionType::Unicode("1\u{FE0F}\u{20E3}".to_string())),
            Some(ReactionSymbol::OptIn)
        );
        assert_eq!(
            reaction_symbol(&ReactionType::Unicode("\u{2611}".to_string())),
            Some(ReactionSymbol::Confirm)
        );
        assert_eq!(
            reaction_symbol(&ReactionType::Unicode("\u{1F44D}".to_string())),
            None
        );
    }

    /// Tests a custom guild emoji named like a game symbol.
    ///
    /// Expected: ignored, only unicode emoji count
    #[test]
    fn custom_emoji_are_ignored() {
        let custom = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(1),
            name: Some("\u{2757}".to_string()),
        };

        assert_eq!(reaction_symbol(&custom), None);
    }
}
