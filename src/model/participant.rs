use crate::{error::internal::InternalError, model::player::Player};

/// A player who opted into the current game.
///
/// The roll is `None` until the player's turn comes up during resolution, which
/// keeps a genuine roll of `0` distinct from "not rolled yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub player: Player,
    roll: Option<i64>,
}

impl Participant {
    pub fn new(player: Player) -> Self {
        Self { player, roll: None }
    }

    pub fn roll(&self) -> Option<i64> {
        self.roll
    }

    pub fn has_rolled(&self) -> bool {
        self.roll.is_some()
    }

    /// Records this participant's roll.
    ///
    /// # Returns
    /// - `Ok(())` - Roll recorded
    /// - `Err(InternalError::RollAlreadyRecorded)` - The participant already rolled
    pub fn record_roll(&mut self, roll: i64) -> Result<(), InternalError> {
        if let Some(existing) = self.roll {
            return Err(InternalError::RollAlreadyRecorded {
                player_id: self.player.id,
                existing,
                attempted: roll,
            });
        }

        self.roll = Some(roll);
        Ok(())
    }
}
