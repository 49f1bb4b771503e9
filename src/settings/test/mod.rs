use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

use crate::{
    data::{guild_settings::GuildSettingsRepository, store::SettingsStore},
    error::{settings::SettingsError, store::StoreError},
    model::guild_settings::GuildSettings,
    settings::cache::SettingsCache,
};


const TIMEOUT: Duration = Duration::from_secs(5);

/// Wraps the SeaORM store to slow down or fail selected operations.
struct ScriptedStore {
    inner: GuildSettingsRepository,
    /// Guild whose operations are delayed, or `None` to delay every guild.
    slow_guild: Option<u64>,
    delay: Duration,
    fail_updates: AtomicBool,
    /// Commits updates and then reports a timeout anyway.
    timeout_after_commit: AtomicBool,
    fail_all: AtomicBool,
    upserts_inserted: AtomicUsize,
}

impl ScriptedStore {
    fn new(db: &DatabaseConnection) -> Self {
        Self {
            inner: GuildSettingsRepository::new(db.clone(), TIMEOUT),
            slow_guild: None,
            delay: Duration::ZERO,
            fail_updates: AtomicBool::new(false),
            timeout_after_commit: AtomicBool::new(false),
            fail_all: AtomicBool::new(false),
            upserts_inserted: AtomicUsize::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn slow_only_for(mut self, guild_id: u64) -> Self {
        self.slow_guild = Some(guild_id);
        self
    }

    async fn pause(&self, guild_id: u64) {
        if self.slow_guild.is_none_or(|slow| slow == guild_id) && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for ScriptedStore {
    async fn load_all(&self) -> Result<Vec<GuildSettings>, StoreError> {
        self.check_available()?;
        self.inner.load_all().await
    }

    async fn find(&self, guild_id: u64) -> Result<Option<GuildSettings>, StoreError> {
        self.check_available()?;
        self.pause(guild_id).await;
        self.inner.find(guild_id).await
    }

    async fn upsert_default(&self, defaults: &GuildSettings) -> Result<bool, StoreError> {
        self.check_available()?;
        self.pause(defaults.guild_id).await;
        let inserted = self.inner.upsert_default(defaults).await?;
        if inserted {
            self.upserts_inserted.fetch_add(1, Ordering::SeqCst);
        }
        Ok(inserted)
    }

    async fn update(&self, settings: &GuildSettings) -> Result<u64, StoreError> {
        self.check_available()?;
        self.pause(settings.guild_id).await;
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout {
                operation: "update",
                timeout: TIMEOUT,
            });
        }
        let rows = self.inner.update(settings).await?;
        if self.timeout_after_commit.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout {
                operation: "update",
                timeout: TIMEOUT,
            });
        }
        Ok(rows)
    }
}

/// Reads the stored row through a plain repository.
async fn stored(db: &DatabaseConnection, guild_id: u64) -> Option<GuildSettings> {
    GuildSettingsRepository::new(db.clone(), TIMEOUT)
        .find(guild_id)
        .await
        .unwrap()
}
