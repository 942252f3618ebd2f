//! Pure state transition function.
//!
//! Takes the current session slot and an event and returns the new slot along
//! with the effects to execute. The only input besides the event is the roll
//! source, which is drawn from when the reveal is planned; with a scripted
//! source the function is fully deterministic.

use crate::{
    model::{
        player::Player,
        reaction::ReactionSymbol,
        session::{Session, SessionSlot, SessionState},
    },
    service::{
        game::{
            effect::{Effect, LogLevel},
            event::GameEvent,
            message,
            rules::{GameRules, MIN_PARTICIPANTS},
            settlement::Settlement,
        },
        roll::{RollExtremes, RollSource},
        table::render_table,
    },
};

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The slot after the transition.
    pub slot: SessionSlot,
    /// Effects to execute, in order.
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(slot: SessionSlot, effects: Vec<Effect>) -> Self {
        Self { slot, effects }
    }

    /// The slot is unchanged and nothing happens.
    pub fn ignored(slot: SessionSlot, reason: impl Into<String>) -> Self {
        Self::new(slot, vec![Effect::log(LogLevel::Debug, reason)])
    }
}

/// Applies `event` to `slot`.
///
/// Events that are not valid in the current state are ignored, never errors.
/// In particular every command and reaction is ignored while a session is
/// `Resolving`, so a running reveal cannot be interleaved with.
pub fn transition(
    slot: SessionSlot,
    event: GameEvent,
    rules: &GameRules,
    rolls: &mut dyn RollSource,
) -> TransitionResult {
    match event {
        GameEvent::StartRequested {
            requester,
            channel_id,
            wager,
        } => start(slot, requester, channel_id, wager, rules),

        GameEvent::AnnouncementPosted { message_id } => announcement_posted(slot, message_id),

        GameEvent::AnnouncementFailed => announcement_failed(slot),

        GameEvent::ReactionAdded {
            reactor,
            message_id,
            symbol,
        } => reaction(slot, reactor, message_id, symbol),

        GameEvent::ResultMessagePosted { message_id } => reveal(slot, message_id, rules, rolls),

        GameEvent::RevealFinished => finish(slot),
    }
}

fn start(
    slot: SessionSlot,
    requester: Player,
    channel_id: u64,
    wager: Option<i64>,
    rules: &GameRules,
) -> TransitionResult {
    if !slot.is_empty() {
        let state = slot.state();
        return TransitionResult::new(
            slot,
            vec![
                Effect::RespondToCommand {
                    content: message::GAME_IN_PROGRESS.to_string(),
                },
                Effect::log(
                    LogLevel::Warn,
                    format!(
                        "Rejected start from {} while a session is {:?}",
                        requester.name, state
                    ),
                ),
            ],
        );
    }

    let wager = wager.unwrap_or(rules.default_wager);
    if wager <= 0 {
        return TransitionResult::new(
            slot,
            vec![
                Effect::RespondToCommand {
                    content: message::INVALID_WAGER.to_string(),
                },
                Effect::log(
                    LogLevel::Warn,
                    format!("Rejected start from {} with wager {}", requester.name, wager),
                ),
            ],
        );
    }

    let effects = vec![
        Effect::Announce {
            channel_id,
            content: message::announcement(&requester, wager),
            reactions: ReactionSymbol::AFFORDANCES.to_vec(),
        },
        Effect::log(
            LogLevel::Info,
            format!(
                "{} started a {} session in channel {}",
                requester.name, wager, channel_id
            ),
        ),
    ];

    TransitionResult::new(SessionSlot::new(Session::new(requester, wager, channel_id)), effects)
}

fn announcement_posted(mut slot: SessionSlot, message_id: u64) -> TransitionResult {
    let Some(session) = slot
        .session_mut()
        .filter(|session| session.prompt_message_id.is_none())
    else {
        return TransitionResult::ignored(slot, "Announcement posted without a pending session");
    };

    session.prompt_message_id = Some(message_id);
    TransitionResult::new(
        slot,
        vec![Effect::log(
            LogLevel::Debug,
            format!("Session anchored to message {}", message_id),
        )],
    )
}

fn announcement_failed(mut slot: SessionSlot) -> TransitionResult {
    let pending = slot
        .session()
        .is_some_and(|session| session.prompt_message_id.is_none());
    if !pending {
        return TransitionResult::ignored(slot, "Announcement failure without a pending session");
    }

    slot.clear();
    TransitionResult::new(
        slot,
        vec![Effect::log(
            LogLevel::Error,
            "Dropping new session, its announcement could not be posted",
        )],
    )
}

fn reaction(
    mut slot: SessionSlot,
    reactor: Player,
    message_id: u64,
    symbol: ReactionSymbol,
) -> TransitionResult {
    let Some(session) = slot.session_mut() else {
        return TransitionResult::ignored(slot, "Reaction with no active session");
    };

    if !session.is_anchor(message_id) {
        return TransitionResult::ignored(slot, "Reaction on a message other than the announcement");
    }

    match symbol {
        ReactionSymbol::OptIn => {
            if !session.accepts_entries() {
                return TransitionResult::ignored(slot, "Opt-in after entries closed");
            }

            let name = reactor.name.clone();
            if !session.add_participant(reactor) {
                return TransitionResult::ignored(slot, format!("{} already participating", name));
            }

            let count = session.participants.len();
            TransitionResult::new(
                slot,
                vec![Effect::log(
                    LogLevel::Info,
                    format!("{} joined the game ({} participants)", name, count),
                )],
            )
        }

        ReactionSymbol::LastCall => {
            if !session.is_host(reactor.id) || session.state != SessionState::Open {
                return TransitionResult::ignored(slot, "Last call not available");
            }

            session.state = SessionState::LastCall;
            let effects = vec![Effect::Reply {
                channel_id: session.channel_id,
                message_id,
                content: message::LAST_CALL.to_string(),
            }];
            TransitionResult::new(slot, effects)
        }

        ReactionSymbol::Confirm => {
            if !session.is_host(reactor.id) || session.state != SessionState::LastCall {
                return TransitionResult::ignored(slot, "Confirm not available");
            }

            close(slot)
        }

        ReactionSymbol::ForceRoll => {
            if !session.is_host(reactor.id) || !session.accepts_entries() {
                return TransitionResult::ignored(slot, "Force roll not available");
            }

            close(slot)
        }
    }
}

/// Closes entries and either aborts the game or moves it into `Resolving`.
fn close(mut slot: SessionSlot) -> TransitionResult {
    let Some(session) = slot.session_mut() else {
        return TransitionResult::ignored(slot, "Close with no active session");
    };
    let Some(prompt_message_id) = session.prompt_message_id else {
        return TransitionResult::ignored(slot, "Close before the announcement was posted");
    };

    session.state = SessionState::Closed;
    let channel_id = session.channel_id;
    let count = session.participants.len();

    if count < MIN_PARTICIPANTS {
        slot.clear();
        return TransitionResult::new(
            slot,
            vec![
                Effect::Reply {
                    channel_id,
                    message_id: prompt_message_id,
                    content: message::NOT_ENOUGH_PARTICIPANTS.to_string(),
                },
                Effect::log(
                    LogLevel::Info,
                    format!("Aborted game with {} participant(s)", count),
                ),
            ],
        );
    }

    session.state = SessionState::Resolving;
    TransitionResult::new(
        slot,
        vec![
            Effect::PostResultMessage {
                channel_id,
                message_id: prompt_message_id,
                content: message::STARTING_ROLL.to_string(),
            },
            Effect::log(
                LogLevel::Info,
                format!("Rolling for {} participants", count),
            ),
        ],
    )
}

/// Rolls for every participant and plans the paced reveal.
///
/// Participants roll in opt-in order. After each roll the results message is
/// re-rendered, so the planned effects reveal one roll at a time. The
/// settlement message follows the last reveal.
fn reveal(
    mut slot: SessionSlot,
    message_id: Option<u64>,
    rules: &GameRules,
    rolls: &mut dyn RollSource,
) -> TransitionResult {
    let Some(session) = slot.session_mut() else {
        return TransitionResult::ignored(slot, "Result message with no active session");
    };
    if session.state != SessionState::Resolving
        || session.participants.iter().any(|p| p.has_rolled())
    {
        return TransitionResult::ignored(slot, "Result message outside a pending resolution");
    }

    session.result_message_id = message_id;
    let channel_id = session.channel_id;
    let pacing = rules.pacing;

    let mut effects = Vec::new();
    if message_id.is_none() {
        effects.push(Effect::log(
            LogLevel::Warn,
            "No result message to edit, rolling without table updates",
        ));
    }

    effects.push(Effect::Pause {
        duration: pacing.opening,
    });
    push_render(&mut effects, session, message::GENERATING_TABLE_TITLE);
    effects.push(Effect::Pause {
        duration: pacing.table,
    });

    let mut extremes = RollExtremes::default();
    for index in 0..session.participants.len() {
        let roll = rolls.draw(session.wager);
        let participant = &mut session.participants[index];

        if let Err(e) = participant.record_roll(roll) {
            effects.push(Effect::log(LogLevel::Error, e.to_string()));
            continue;
        }
        extremes.record(&participant.player, roll);

        let title = message::results_title(&participant.player.name);
        push_render(&mut effects, session, &title);
        effects.push(Effect::Pause {
            duration: pacing.step,
        });
    }

    let settlement = Settlement::from_extremes(&extremes);
    effects.push(Effect::SendMessage {
        channel_id,
        content: settlement.message(),
    });
    effects.push(Effect::FinishReveal);

    TransitionResult::new(slot, effects)
}

/// Edits the results message with the current standings, if there is one.
fn push_render(effects: &mut Vec<Effect>, session: &Session, title: &str) {
    if let Some(message_id) = session.result_message_id {
        effects.push(Effect::EditMessage {
            channel_id: session.channel_id,
            message_id,
            content: render_table(title, &session.participants, session.wager),
        });
    }
}

fn finish(mut slot: SessionSlot) -> TransitionResult {
    let Some(session) = slot.session_mut() else {
        return TransitionResult::ignored(slot, "Reveal finished with no active session");
    };
    if session.state != SessionState::Resolving {
        return TransitionResult::ignored(slot, "Reveal finished outside a resolution");
    }

    session.state = SessionState::Resolved;
    let host = session.host.name.clone();
    slot.clear();

    TransitionResult::new(
        slot,
        vec![Effect::log(
            LogLevel::Info,
            format!("Game hosted by {} resolved", host),
        )],
    )
}
