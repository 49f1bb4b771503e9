use std::{collections::HashSet, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "db!";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;
/// Every 30 minutes, on the minute.
const DEFAULT_PATRON_RELOAD_CRON: &str = "0 */30 * * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Prefix used by guilds that have not set their own.
    pub default_prefix: String,
    /// Users allowed to run owner-only commands.
    pub owner_ids: HashSet<u64>,
    /// Upper bound for a single settings store operation.
    pub store_timeout: Duration,
    pub patron_reload_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let store_timeout_secs = match std::env::var("STORE_TIMEOUT_SECS") {
            Ok(value) => parse_env::<u64>("STORE_TIMEOUT_SECS", &value)?,
            Err(_) => DEFAULT_STORE_TIMEOUT_SECS,
        };

        let owner_ids = match std::env::var("BOT_OWNER_IDS") {
            Ok(value) => parse_id_list("BOT_OWNER_IDS", &value)?,
            Err(_) => HashSet::new(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            default_prefix: std::env::var("DEFAULT_PREFIX")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            owner_ids,
            store_timeout: Duration::from_secs(store_timeout_secs),
            patron_reload_cron: std::env::var("PATRON_RELOAD_CRON")
                .unwrap_or_else(|_| DEFAULT_PATRON_RELOAD_CRON.to_string()),
        })
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a comma separated list of Discord IDs, ignoring empty entries.
fn parse_id_list(name: &str, value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_env::<u64>(name, entry))
        .collect()
}
