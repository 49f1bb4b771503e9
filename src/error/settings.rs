use thiserror::Error;

use crate::error::store::StoreError;

/// Errors returned by the settings cache.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The write-through to the store failed so the cached value was left unchanged.
    #[error("Failed to persist settings for guild {guild_id}: {source}")]
    Persistence {
        guild_id: u64,
        #[source]
        source: StoreError,
    },

    /// The update reached the store but no row exists for the guild.
    #[error("No stored settings row for guild {0}")]
    MissingRow(u64),
}
