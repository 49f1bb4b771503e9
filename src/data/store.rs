use serenity::async_trait;

use crate::{error::store::StoreError, model::guild_settings::GuildSettings};

/// Stateless gateway to durable guild settings.
///
/// Every call is a single bounded round trip to the database. Implementations
/// hold no cached state and never retry; a failure is returned as is and the
/// caller decides what to do with it.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads every stored settings row.
    async fn load_all(&self) -> Result<Vec<GuildSettings>, StoreError>;

    /// Reads the stored row for one guild.
    async fn find(&self, guild_id: u64) -> Result<Option<GuildSettings>, StoreError>;

    /// Inserts `defaults` unless a row for the same guild already exists.
    ///
    /// Returns `true` when a row was inserted and `false` when one was already there.
    async fn upsert_default(&self, defaults: &GuildSettings) -> Result<bool, StoreError>;

    /// Overwrites the stored row with `settings`, returning the number of rows affected.
    async fn update(&self, settings: &GuildSettings) -> Result<u64, StoreError>;
}
