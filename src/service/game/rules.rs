use std::time::Duration;

use crate::config::Config;

/// Fewest participants a game can resolve with.
pub const MIN_PARTICIPANTS: usize = 2;

/// Delays between the steps of the results reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPacing {
    /// After the "starting" reply, before the first table
    pub opening: Duration,
    /// After the pre-roll table, before the first roll
    pub table: Duration,
    /// After each roll is revealed
    pub step: Duration,
}

#[cfg(test)]
impl RevealPacing {
    /// No delays at all.
    pub const INSTANT: RevealPacing = RevealPacing {
        opening: Duration::ZERO,
        table: Duration::ZERO,
        step: Duration::ZERO,
    };
}

/// Tunables the state machine needs from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Wager used when `start` is run without an amount
    pub default_wager: i64,
    pub pacing: RevealPacing,
}

impl From<&Config> for GameRules {
    fn from(config: &Config) -> Self {
        Self {
            default_wager: config.default_wager,
            pacing: RevealPacing {
                opening: config.reveal_opening_delay,
                table: config.reveal_table_delay,
                step: config.reveal_step_delay,
            },
        }
    }
}
