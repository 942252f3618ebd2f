//! Shared fixtures for game tests: a scripted roll source and a platform fake
//! that records every outbound call.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{player::Player, reaction::ReactionSymbol},
    service::{game::effect::Effect, roll::RollSource},
};

pub fn player(id: u64, name: &str) -> Player {
    Player::new(id, name)
}

/// Drops `Log` effects, leaving only what reaches the platform or the pacer.
pub fn platform_effects(effects: &[Effect]) -> Vec<Effect> {
    effects
        .iter()
        .filter(|e| !matches!(e, Effect::Log { .. }))
        .cloned()
        .collect()
}

/// Roll source that returns a fixed sequence of rolls.
pub struct ScriptedRolls {
    rolls: VecDeque<i64>,
}

impl ScriptedRolls {
    pub fn new(rolls: &[i64]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

impl RollSource for ScriptedRolls {
    fn draw(&mut self, wager: i64) -> i64 {
        let roll = self.rolls.pop_front().expect("scripted rolls exhausted");
        assert!((0..wager).contains(&roll), "scripted roll {roll} outside wager {wager}");
        roll
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Respond {
        content: String,
    },
    React {
        channel_id: u64,
        message_id: u64,
        symbol: ReactionSymbol,
    },
    Send {
        channel_id: u64,
        content: String,
    },
    Reply {
        channel_id: u64,
        message_id: u64,
        content: String,
    },
    Edit {
        channel_id: u64,
        message_id: u64,
        content: String,
    },
}

/// Platform fake recording every call, including ones it is told to fail.
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    next_message_id: AtomicU64,
    fail_responses: bool,
    fail_replies: bool,
    fail_edits: bool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_message_id: AtomicU64::new(1000),
            fail_responses: false,
            fail_replies: false,
            fail_edits: false,
        }
    }

    pub fn failing_responses(mut self) -> Self {
        self.fail_responses = true;
        self
    }

    pub fn failing_replies(mut self) -> Self {
        self.fail_replies = true;
        self
    }

    pub fn failing_edits(mut self) -> Self {
        self.fail_edits = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Id handed out for the most recent successfully created message.
    pub fn last_message_id(&self) -> u64 {
        self.next_message_id.load(Ordering::SeqCst) - 1
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn new_message_id(&self) -> u64 {
        self.next_message_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn simulated_failure() -> AppError {
    serenity::Error::Other("simulated platform failure").into()
}

#[async_trait]
impl crate::service::game::platform::Platform for RecordingPlatform {
    async fn respond_to_command(&self, content: &str) -> Result<u64, AppError> {
        self.record(PlatformCall::Respond {
            content: content.to_string(),
        });
        if self.fail_responses {
            return Err(simulated_failure());
        }
        Ok(self.new_message_id())
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        symbol: ReactionSymbol,
    ) -> Result<(), AppError> {
        self.record(PlatformCall::React {
            channel_id,
            message_id,
            symbol,
        });
        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        self.record(PlatformCall::Send {
            channel_id,
            content: content.to_string(),
        });
        Ok(self.new_message_id())
    }

    async fn send_reply(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<u64, AppError> {
        self.record(PlatformCall::Reply {
            channel_id,
            message_id,
            content: content.to_string(),
        });
        if self.fail_replies {
            return Err(simulated_failure());
        }
        Ok(self.new_message_id())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        self.record(PlatformCall::Edit {
            channel_id,
            message_id,
            content: content.to_string(),
        });
        if self.fail_edits {
            return Err(simulated_failure());
        }
        Ok(())
    }
}
