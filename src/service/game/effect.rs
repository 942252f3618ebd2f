//! Effects (side effects as data).
//!
//! Transitions never talk to Discord. They return effects describing what
//! should happen, and the interpreter executes them in order.

use std::time::Duration;

use crate::model::reaction::ReactionSymbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Answer the slash command that produced the current event.
    RespondToCommand { content: String },

    /// Answer the slash command with the session announcement, then attach
    /// the reaction affordances to it.
    ///
    /// Produces `AnnouncementPosted` or `AnnouncementFailed`.
    Announce {
        channel_id: u64,
        content: String,
        reactions: Vec<ReactionSymbol>,
    },

    /// Reply to an existing message.
    Reply {
        channel_id: u64,
        message_id: u64,
        content: String,
    },

    /// Reply to the announcement with the message that will hold the table.
    ///
    /// Produces `ResultMessagePosted`.
    PostResultMessage {
        channel_id: u64,
        message_id: u64,
        content: String,
    },

    /// Replace the content of an existing message.
    EditMessage {
        channel_id: u64,
        message_id: u64,
        content: String,
    },

    /// Post a new message.
    SendMessage { channel_id: u64, content: String },

    /// Wait before executing the next effect.
    Pause { duration: Duration },

    /// Marks the end of the reveal sequence. Produces `RevealFinished`.
    FinishReveal,

    /// Log a message.
    Log { level: LogLevel, message: String },
}

impl Effect {
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Effect::Log {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}
