use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A command response was requested on a platform handle that was not
    /// created for a slash command interaction.
    #[error("Cannot respond to a command without a command interaction")]
    MissingCommandInteraction,

    /// A participant was asked to record a second roll during one resolution.
    ///
    /// Each participant rolls exactly once per game.
    #[error("Participant {player_id} already rolled {existing}, refusing to record {attempted}")]
    RollAlreadyRecorded {
        /// Discord user id of the participant
        player_id: u64,
        /// The roll already on record
        existing: i64,
        /// The roll that was rejected
        attempted: i64,
    },

    /// The global logger could not be installed at startup.
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
