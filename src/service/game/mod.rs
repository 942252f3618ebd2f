//! Session state machine for the rolling game.
//!
//! The design separates:
//! - **State**: the session slot (`model::session::SessionSlot`)
//! - **Events**: what happened (`GameEvent`)
//! - **Effects**: what to do (`Effect`)
//! - **Transition**: pure function `(Slot, Event) -> (Slot, Vec<Effect>)`
//!
//! The interpreter executes effects against the platform and returns result
//! events, which `GameService::dispatch` feeds back into the transition until
//! none are left.

pub mod effect;
pub mod event;
pub mod interpreter;
pub mod message;
pub mod pacer;
pub mod platform;
pub mod rules;
pub mod settlement;
pub mod transition;

#[cfg(test)]
pub mod test_support;

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

#[cfg(test)]
use crate::model::session::SessionState;
use crate::{
    model::session::SessionSlot,
    service::{
        game::{
            event::GameEvent, interpreter::execute_effects, pacer::RevealPacer,
            platform::Platform, rules::GameRules, transition::transition,
        },
        roll::RollSource,
    },
};

/// Everything guarded by the session lock.
struct GameState {
    slot: SessionSlot,
    rolls: Box<dyn RollSource + Send>,
}

/// Owner of the single game slot.
///
/// Cloning is cheap and every clone shares the same slot. All reads and writes
/// of the slot happen under one mutex, which is released before any effect is
/// executed so a long reveal never blocks other events from being rejected.
#[derive(Clone)]
pub struct GameService {
    state: Arc<Mutex<GameState>>,
    rules: GameRules,
}

impl GameService {
    pub fn new(rules: GameRules, rolls: Box<dyn RollSource + Send>) -> Self {
        Self {
            state: Arc::new(Mutex::new(GameState {
                slot: SessionSlot::default(),
                rolls,
            })),
            rules,
        }
    }

    /// Applies an event and executes everything it leads to.
    ///
    /// Effects of each transition are executed through `platform`, and the
    /// events they produce are applied in turn. For a confirm this covers the
    /// whole resolution: starting reply, paced reveal, settlement and reset.
    ///
    /// # Arguments
    /// - `platform` - Where messages are sent for this event
    /// - `pacer` - Sleeps between reveal steps, aborted on shutdown
    /// - `event` - Inbound event from Discord
    pub async fn dispatch<P>(&self, platform: &P, pacer: &RevealPacer, event: GameEvent)
    where
        P: Platform + ?Sized,
    {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            let effects = {
                let mut guard = self.state.lock().await;
                let GameState { slot, rolls } = &mut *guard;

                let result = transition(std::mem::take(slot), event, &self.rules, &mut **rolls);
                *slot = result.slot;
                result.effects
            };

            pending.extend(execute_effects(platform, pacer, effects).await);
        }
    }

    /// Current lifecycle state of the slot.
    #[cfg(test)]
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.slot.state()
    }

    /// Snapshot of the slot, for inspection.
    #[cfg(test)]
    pub async fn snapshot(&self) -> SessionSlot {
        self.state.lock().await.slot.clone()
    }
}
