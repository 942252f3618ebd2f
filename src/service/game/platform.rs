//! Outbound messaging boundary.
//!
//! The interpreter only needs these five operations from the chat platform.
//! `bot::platform::SerenityPlatform` implements them against Discord; tests use
//! a recording fake.

use serenity::async_trait;

use crate::{error::AppError, model::reaction::ReactionSymbol};

#[async_trait]
pub trait Platform: Send + Sync {
    /// Answers the slash command being handled.
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the response message
    /// - `Err(AppError)` - No command to answer, or Discord rejected the response
    async fn respond_to_command(&self, content: &str) -> Result<u64, AppError>;

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        symbol: ReactionSymbol,
    ) -> Result<(), AppError>;

    /// Posts a new message, returning its id.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError>;

    /// Posts a reply to `message_id`, returning the reply's id.
    async fn send_reply(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<u64, AppError>;

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError>;
}
