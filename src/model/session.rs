//! The single game session and the slot that holds it.

use crate::model::{participant::Participant, player::Player};

/// Lifecycle states of a game.
///
/// `Empty` is never stored on a `Session`; it is what `SessionSlot::state`
/// reports when no game exists. `Closed` and `Resolved` are passed through
/// within a single transition and are only observable in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Open,
    LastCall,
    Closed,
    Resolving,
    Resolved,
}

/// The active game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Player who ran the `start` command
    pub host: Player,
    /// Upper bound (exclusive) for every roll, always positive
    pub wager: i64,
    pub state: SessionState,
    /// Participants in opt-in order, unique by player id
    pub participants: Vec<Participant>,
    /// Channel the game was started in
    pub channel_id: u64,
    /// Announcement message carrying the reaction affordances.
    ///
    /// `None` until the announcement has been posted; reactions cannot match
    /// the session before then.
    pub prompt_message_id: Option<u64>,
    /// Message edited with the results table during resolution
    pub result_message_id: Option<u64>,
}

impl Session {
    pub fn new(host: Player, wager: i64, channel_id: u64) -> Self {
        Self {
            host,
            wager,
            state: SessionState::Open,
            participants: Vec::new(),
            channel_id,
            prompt_message_id: None,
            result_message_id: None,
        }
    }

    pub fn is_host(&self, user_id: u64) -> bool {
        self.host.id == user_id
    }

    /// Whether `message_id` is this session's announcement.
    pub fn is_anchor(&self, message_id: u64) -> bool {
        self.prompt_message_id == Some(message_id)
    }

    pub fn contains(&self, user_id: u64) -> bool {
        self.participants.iter().any(|p| p.player.id == user_id)
    }

    /// Entries stay open through last call and shut once the host confirms.
    pub fn accepts_entries(&self) -> bool {
        matches!(self.state, SessionState::Open | SessionState::LastCall)
    }

    /// Adds a player to the end of the participant list.
    ///
    /// # Returns
    /// - `true` - Player added
    /// - `false` - Player already participating, list unchanged
    pub fn add_participant(&mut self, player: Player) -> bool {
        if self.contains(player.id) {
            return false;
        }

        self.participants.push(Participant::new(player));
        true
    }
}

/// Holder for the at-most-one active session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSlot {
    session: Option<Session>,
}

impl SessionSlot {
    pub fn new(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map_or(SessionState::Empty, |session| session.state)
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_none()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Drops the active session, returning the slot to `Empty`.
    pub fn clear(&mut self) -> Option<Session> {
        self.session.take()
    }
}
