use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::{
    data::store::SettingsStore,
    error::{settings::SettingsError, store::StoreError},
    model::guild_settings::GuildSettings,
};

/// Process-wide cache of guild settings backed by a `SettingsStore`.
///
/// Readers get an `Arc` snapshot and never block on writers. Writes for one
/// guild are serialized by a per-guild async lock, so a slow store round trip
/// for one guild never holds up another. A snapshot is only published after
/// the store has committed it, so readers never see a value that a failed
/// write later takes back.
pub struct SettingsCache {
    store: Arc<dyn SettingsStore>,
    default_prefix: String,
    entries: DashMap<u64, Arc<GuildSettings>>,
    locks: DashMap<u64, Arc<Mutex<()>>>,
}

impl SettingsCache {
    pub fn new(store: Arc<dyn SettingsStore>, default_prefix: impl Into<String>) -> Self {
        Self {
            store,
            default_prefix: default_prefix.into(),
            entries: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    /// Prefix given to newly registered guilds.
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    /// Populates the cache from every stored row.
    ///
    /// Rows already cached are replaced. Returns the number of guilds loaded.
    pub async fn load_all(&self) -> Result<usize, StoreError> {
        let settings = self.store.load_all().await?;
        let count = settings.len();

        for s in settings {
            self.entries.insert(s.guild_id, Arc::new(s));
        }

        Ok(count)
    }

    /// Returns the cached snapshot without touching the store.
    pub fn cached(&self, guild_id: u64) -> Option<Arc<GuildSettings>> {
        self.entries.get(&guild_id).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lock_for(&self, guild_id: u64) -> Arc<Mutex<()>> {
        self.locks
            .entry(guild_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Gets the settings for a guild, registering defaults on first contact.
    ///
    /// Concurrent first contacts for the same guild produce one stored row
    /// and all callers observe the same snapshot. A store failure is returned
    /// without caching anything, so the next call retries the registration.
    pub async fn get(
        &self,
        guild_id: u64,
        guild_name: &str,
    ) -> Result<Arc<GuildSettings>, StoreError> {
        if let Some(settings) = self.cached(guild_id) {
            return Ok(settings);
        }

        let lock = self.lock_for(guild_id);
        let _guard = lock.lock().await;

        if let Some(settings) = self.cached(guild_id) {
            return Ok(settings);
        }

        let defaults = GuildSettings::new_default(guild_id, guild_name, &self.default_prefix);

        let settings = if self.store.upsert_default(&defaults).await? {
            tracing::info!("Registered settings for guild {} ({})", guild_name, guild_id);
            defaults
        } else {
            // Another process registered the guild after startup.
            self.store.find(guild_id).await?.unwrap_or(defaults)
        };

        let settings = Arc::new(settings);
        self.entries.insert(guild_id, settings.clone());

        Ok(settings)
    }

    /// Replaces a guild's settings and writes them through to the store.
    pub async fn set(&self, settings: GuildSettings) -> Result<Arc<GuildSettings>, SettingsError> {
        let guild_id = settings.guild_id;

        if self.cached(guild_id).is_none() {
            self.get(guild_id, &settings.name)
                .await
                .map_err(|source| SettingsError::Persistence { guild_id, source })?;
        }

        let lock = self.lock_for(guild_id);
        let _guard = lock.lock().await;

        self.write_through(settings).await
    }

    /// Applies a change computed from the current snapshot.
    ///
    /// `change` runs while the guild's lock is held, so read-modify-write
    /// sequences such as toggles cannot lose updates. Returning `None` from
    /// `change` leaves the settings untouched and yields `Ok(None)`.
    pub async fn modify<F>(
        &self,
        guild_id: u64,
        guild_name: &str,
        change: F,
    ) -> Result<Option<Arc<GuildSettings>>, SettingsError>
    where
        F: FnOnce(&GuildSettings) -> Option<GuildSettings>,
    {
        // Registration takes the same lock, so it has to happen first.
        self.get(guild_id, guild_name)
            .await
            .map_err(|source| SettingsError::Persistence { guild_id, source })?;

        let lock = self.lock_for(guild_id);
        let _guard = lock.lock().await;

        let current = match self.cached(guild_id) {
            Some(current) => current,
            None => return Err(SettingsError::MissingRow(guild_id)),
        };

        match change(current.as_ref()) {
            Some(next) => self.write_through(next).await.map(Some),
            None => Ok(None),
        }
    }

    /// Persists `settings` and publishes it once the store confirmed the write.
    /// Caller must hold the guild's lock.
    ///
    /// Readers keep seeing the previous snapshot until the update has
    /// committed. A timed out update may still have committed, so the row is
    /// read back and the cache follows whatever the store holds.
    async fn write_through(
        &self,
        settings: GuildSettings,
    ) -> Result<Arc<GuildSettings>, SettingsError> {
        let guild_id = settings.guild_id;

        let error = match self.store.update(&settings).await {
            Ok(0) => SettingsError::MissingRow(guild_id),
            Ok(_) => return Ok(self.publish(settings)),
            Err(source @ StoreError::Timeout { .. }) => {
                match self.store.find(guild_id).await {
                    Ok(Some(stored)) if stored == settings => {
                        tracing::warn!(
                            "Update for guild {} timed out after committing",
                            guild_id
                        );
                        return Ok(self.publish(settings));
                    }
                    Ok(Some(stored)) => {
                        self.publish(stored);
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!(
                        "Could not read back settings for guild {}: {}",
                        guild_id,
                        e
                    ),
                }
                SettingsError::Persistence { guild_id, source }
            }
            Err(source) => SettingsError::Persistence { guild_id, source },
        };

        tracing::warn!("Settings for guild {} were not saved: {}", guild_id, error);

        Err(error)
    }

    fn publish(&self, settings: GuildSettings) -> Arc<GuildSettings> {
        let settings = Arc::new(settings);
        self.entries.insert(settings.guild_id, settings.clone());
        settings
    }
}
