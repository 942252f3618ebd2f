//! Events fed into the session state machine.
//!
//! Some come from Discord (commands, reactions); the rest report the outcome
//! of effects the interpreter just executed.

use crate::model::{player::Player, reaction::ReactionSymbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player ran the `start` command.
    StartRequested {
        requester: Player,
        channel_id: u64,
        /// Wager override from the command, if one was given
        wager: Option<i64>,
    },

    /// The announcement for a new session was posted.
    AnnouncementPosted { message_id: u64 },

    /// The announcement for a new session could not be posted.
    AnnouncementFailed,

    /// A player reacted to a message with one of the game's symbols.
    ReactionAdded {
        reactor: Player,
        message_id: u64,
        symbol: ReactionSymbol,
    },

    /// The "starting" reply that will carry the results table was posted.
    ///
    /// `None` if posting failed; the game still resolves, without table edits.
    ResultMessagePosted { message_id: Option<u64> },

    /// Every reveal step and the settlement message have been executed.
    RevealFinished,
}
