//! Discord bot integration.
//!
//! Translates gateway events into `GameEvent`s for the game service and
//! implements the outbound `Platform` over Serenity's HTTP client. The bot is
//! the only part of the crate that knows about Discord types.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and slash command interactions
//! - `GUILD_MESSAGE_REACTIONS` - Receive reactions on the game announcement
//!
//! Neither is privileged, so no Developer Portal changes are needed.

pub mod command;
pub mod handler;
pub mod identity;
pub mod platform;
pub mod start;
