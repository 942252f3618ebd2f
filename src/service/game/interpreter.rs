//! Effect interpreter that executes effects against the chat platform.
//!
//! The interpreter is the boundary between the pure state machine and Discord.
//! It takes effects (descriptions of what to do), executes them in order and
//! returns the events their outcomes produce. Platform failures are logged and
//! never stop the remaining effects; only a process shutdown does.

use dioxus_logger::tracing;

use crate::service::game::{
    effect::{Effect, LogLevel},
    event::GameEvent,
    pacer::RevealPacer,
    platform::Platform,
};

/// Result of executing an effect.
#[derive(Debug)]
enum EffectResult {
    /// Effect completed, produced result events.
    Ok(Vec<GameEvent>),
    /// Effect failed with an error.
    Err(String),
    /// Shutdown was signalled; no further effects should run.
    Aborted,
}

impl EffectResult {
    fn single(event: GameEvent) -> Self {
        Self::Ok(vec![event])
    }

    fn none() -> Self {
        Self::Ok(vec![])
    }
}

/// Execute a list of effects and collect result events.
///
/// Effects are executed sequentially. If an effect fails, execution continues
/// with remaining effects, and the error is logged. If a pause is interrupted
/// by shutdown, the remaining effects are dropped.
pub async fn execute_effects<P>(
    platform: &P,
    pacer: &RevealPacer,
    effects: Vec<Effect>,
) -> Vec<GameEvent>
where
    P: Platform + ?Sized,
{
    let mut result_events = Vec::new();
    let total = effects.len();

    for (index, effect) in effects.into_iter().enumerate() {
        match execute_effect(platform, pacer, effect).await {
            EffectResult::Ok(events) => result_events.extend(events),
            EffectResult::Err(err) => {
                tracing::error!("Effect execution failed: {}", err);
            }
            EffectResult::Aborted => {
                tracing::warn!(
                    "Shutdown during reveal, skipping {} remaining effect(s)",
                    total - index - 1
                );
                break;
            }
        }
    }

    result_events
}

/// Execute a single effect.
async fn execute_effect<P>(platform: &P, pacer: &RevealPacer, effect: Effect) -> EffectResult
where
    P: Platform + ?Sized,
{
    match effect {
        Effect::RespondToCommand { content } => match platform.respond_to_command(&content).await {
            Ok(_) => EffectResult::none(),
            Err(e) => EffectResult::Err(format!("Failed to respond to command: {}", e)),
        },

        Effect::Announce {
            channel_id,
            content,
            reactions,
        } => execute_announce(platform, channel_id, &content, &reactions).await,

        Effect::Reply {
            channel_id,
            message_id,
            content,
        } => match platform.send_reply(channel_id, message_id, &content).await {
            Ok(_) => EffectResult::none(),
            Err(e) => EffectResult::Err(format!(
                "Failed to reply to message {} in channel {}: {}",
                message_id, channel_id, e
            )),
        },

        Effect::PostResultMessage {
            channel_id,
            message_id,
            content,
        } => match platform.send_reply(channel_id, message_id, &content).await {
            Ok(result_id) => EffectResult::single(GameEvent::ResultMessagePosted {
                message_id: Some(result_id),
            }),
            Err(e) => {
                tracing::error!(
                    "Failed to post result message in channel {}: {}",
                    channel_id,
                    e
                );
                EffectResult::single(GameEvent::ResultMessagePosted { message_id: None })
            }
        },

        Effect::EditMessage {
            channel_id,
            message_id,
            content,
        } => match platform.edit_message(channel_id, message_id, &content).await {
            Ok(()) => EffectResult::none(),
            Err(e) => EffectResult::Err(format!(
                "Failed to edit message {} in channel {}: {}",
                message_id, channel_id, e
            )),
        },

        Effect::SendMessage {
            channel_id,
            content,
        } => match platform.send_message(channel_id, &content).await {
            Ok(_) => EffectResult::none(),
            Err(e) => EffectResult::Err(format!(
                "Failed to send message to channel {}: {}",
                channel_id, e
            )),
        },

        Effect::Pause { duration } => {
            if pacer.pause(duration).await {
                EffectResult::none()
            } else {
                EffectResult::Aborted
            }
        }

        Effect::FinishReveal => EffectResult::single(GameEvent::RevealFinished),

        Effect::Log { level, message } => {
            match level {
                LogLevel::Debug => tracing::debug!("{}", message),
                LogLevel::Info => tracing::info!("{}", message),
                LogLevel::Warn => tracing::warn!("{}", message),
                LogLevel::Error => tracing::error!("{}", message),
            }
            EffectResult::none()
        }
    }
}

/// Posts the announcement and attaches the reaction affordances.
///
/// A failed reaction is logged but the session stays anchored; players can
/// still add the reaction by hand.
async fn execute_announce<P>(
    platform: &P,
    channel_id: u64,
    content: &str,
    reactions: &[crate::model::reaction::ReactionSymbol],
) -> EffectResult
where
    P: Platform + ?Sized,
{
    let message_id = match platform.respond_to_command(content).await {
        Ok(message_id) => message_id,
        Err(e) => {
            tracing::error!("Failed to post session announcement: {}", e);
            return EffectResult::single(GameEvent::AnnouncementFailed);
        }
    };

    for symbol in reactions {
        if let Err(e) = platform.add_reaction(channel_id, message_id, *symbol).await {
            tracing::error!(
                "Failed to add {:?} reaction to announcement {}: {}",
                symbol,
                message_id,
                e
            );
        }
    }

    EffectResult::single(GameEvent::AnnouncementPosted { message_id })
}
