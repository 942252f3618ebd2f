//! Discord implementation of the game's outbound messaging.

use std::sync::Arc;

use serenity::all::{
    ChannelId, CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditMessage, Http, MessageId, MessageReference, ReactionType,
};
use serenity::async_trait;

use crate::{
    error::{internal::InternalError, AppError},
    model::reaction::ReactionSymbol,
    service::game::platform::Platform,
};

/// Sends game output through Serenity's HTTP client.
///
/// A platform created with `for_command` can also answer the slash command it
/// was created for; one created with `new` only posts to channels.
pub struct SerenityPlatform {
    http: Arc<Http>,
    command: Option<CommandInteraction>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            command: None,
        }
    }

    pub fn for_command(http: Arc<Http>, command: CommandInteraction) -> Self {
        Self {
            http,
            command: Some(command),
        }
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn respond_to_command(&self, content: &str) -> Result<u64, AppError> {
        let command = self
            .command
            .as_ref()
            .ok_or(InternalError::MissingCommandInteraction)?;

        command
            .create_response(
                &self.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().content(content),
                ),
            )
            .await?;

        // Interaction responses don't return the created message, fetch it to get the id
        let message = command.get_response(&self.http).await?;

        Ok(message.id.get())
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        symbol: ReactionSymbol,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .create_reaction(
                &self.http,
                MessageId::new(message_id),
                ReactionType::Unicode(symbol.emoji().to_string()),
            )
            .await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id.get())
    }

    async fn send_reply(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<u64, AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message = CreateMessage::new()
            .content(content)
            .reference_message(MessageReference::from((
                channel_id,
                MessageId::new(message_id),
            )));

        let reply = channel_id.send_message(&self.http, message).await?;

        Ok(reply.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().content(content),
            )
            .await?;

        Ok(())
    }
}
