use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// Wager used when the `start` command is invoked without an amount.
pub const DEFAULT_WAGER: i64 = 100_000;

const DEFAULT_OPENING_DELAY_MS: u64 = 3_000;
const DEFAULT_TABLE_DELAY_MS: u64 = 2_000;
const DEFAULT_STEP_DELAY_MS: u64 = 3_000;

pub struct Config {
    pub discord_bot_token: String,
    /// Snowflake ids are never zero
    pub discord_guild_id: NonZeroU64,

    pub default_wager: i64,

    pub reveal_opening_delay: Duration,
    pub reveal_table_delay: Duration,
    pub reveal_step_delay: Duration,

    pub roll_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_wager = optional(&lookup, "DEFAULT_WAGER")?.unwrap_or(DEFAULT_WAGER);
        if default_wager <= 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "DEFAULT_WAGER".to_string(),
                value: default_wager.to_string(),
                reason: "wager must be a positive integer".to_string(),
            }
            .into());
        }

        Ok(Self {
            discord_bot_token: required(&lookup, "DISCORD_BOT_TOKEN")?,
            discord_guild_id: parse("DISCORD_GUILD_ID", required(&lookup, "DISCORD_GUILD_ID")?)?,
            default_wager,
            reveal_opening_delay: delay(&lookup, "REVEAL_OPENING_DELAY_MS", DEFAULT_OPENING_DELAY_MS)?,
            reveal_table_delay: delay(&lookup, "REVEAL_TABLE_DELAY_MS", DEFAULT_TABLE_DELAY_MS)?,
            reveal_step_delay: delay(&lookup, "REVEAL_STEP_DELAY_MS", DEFAULT_STEP_DELAY_MS)?,
            roll_seed: optional(&lookup, "ROLL_SEED")?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name).map(|value| parse(name, value)).transpose()
}

fn delay<F>(lookup: &F, name: &str, default_ms: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let millis = optional(lookup, name)?.unwrap_or(default_ms);
    Ok(Duration::from_millis(millis))
}

fn parse<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
