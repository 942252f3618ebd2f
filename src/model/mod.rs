//! Domain models for the rolling game.
//!
//! These types are independent of Discord: identities are plain snowflake ids
//! and display names, and messages are referenced by their raw ids. The bot
//! layer converts Serenity objects into these models at the edge.

pub mod participant;
pub mod player;
pub mod reaction;
pub mod session;
