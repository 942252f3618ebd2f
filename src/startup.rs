use dioxus_logger::tracing;

use crate::{
    config::Config,
    service::{game::rules::GameRules, game::GameService, roll::RollEngine},
};

/// Builds the game service from configuration.
///
/// Rolls come from the operating system's entropy unless `ROLL_SEED` is set,
/// in which case every run draws the same sequence.
///
/// # Arguments
/// - `config` - Application configuration with wager, pacing and seed
///
/// # Returns
/// - `GameService` - Service with an empty session slot
pub fn setup_game_service(config: &Config) -> GameService {
    let rolls = match config.roll_seed {
        Some(seed) => {
            tracing::warn!("ROLL_SEED is set, rolls are deterministic");
            RollEngine::seeded(seed)
        }
        None => RollEngine::from_os_rng(),
    };

    GameService::new(GameRules::from(config), Box::new(rolls))
}
