use std::{future::Future, time::Duration};

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serenity::async_trait;

use crate::{
    data::store::SettingsStore, error::store::StoreError, model::guild_settings::GuildSettings,
};

/// SeaORM implementation of the settings store.
///
/// Unlike the other repositories this one owns a handle to the connection
/// pool, since it lives inside the settings cache for the whole process
/// lifetime. Connections are checked out per query by the pool and returned
/// when the query future completes or is dropped on timeout.
#[derive(Clone)]
pub struct GuildSettingsRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl GuildSettingsRepository {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Runs a query, failing with `StoreError::Timeout` once the bound elapses.
    pub(crate) async fn bounded<T, F>(
        &self,
        operation: &'static str,
        query: F,
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout {
                operation,
                timeout: self.timeout,
            }),
        }
    }
}

/// Maps every settings column; `id` is left to the database.
fn to_active_model(settings: &GuildSettings) -> entity::guild_settings::ActiveModel {
    entity::guild_settings::ActiveModel {
        guild_id: ActiveValue::Set(settings.guild_id.to_string()),
        name: ActiveValue::Set(settings.name.clone()),
        prefix: ActiveValue::Set(settings.prefix.clone()),
        enable_swear_filter: ActiveValue::Set(settings.enable_swear_filter),
        enable_spam_filter: ActiveValue::Set(settings.enable_spam_filter),
        mute_role_id: ActiveValue::Set(settings.mute_role_id.map(|id| id as i64)),
        filter_invites: ActiveValue::Set(settings.filter_invites),
        enable_join_message: ActiveValue::Set(settings.enable_join_message),
        custom_join_message: ActiveValue::Set(settings.custom_join_message.clone()),
        ..Default::default()
    }
}

#[async_trait]
impl SettingsStore for GuildSettingsRepository {
    /// Loads all guild settings rows.
    ///
    /// Rows whose guild_id cannot be parsed are skipped with a warning so that
    /// a single bad row does not keep every other guild from loading.
    async fn load_all(&self) -> Result<Vec<GuildSettings>, StoreError> {
        let rows = self
            .bounded(
                "load_all",
                entity::prelude::GuildSettings::find().all(&self.db),
            )
            .await?;

        let mut settings = Vec::with_capacity(rows.len());
        for row in rows {
            match GuildSettings::from_entity(row) {
                Ok(s) => settings.push(s),
                Err(e) => tracing::warn!("Skipping guild settings row: {}", e),
            }
        }

        Ok(settings)
    }

    async fn find(&self, guild_id: u64) -> Result<Option<GuildSettings>, StoreError> {
        let row = self
            .bounded(
                "find",
                entity::prelude::GuildSettings::find()
                    .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
                    .one(&self.db),
            )
            .await?;

        row.map(GuildSettings::from_entity).transpose()
    }

    /// Inserts the default row, relying on the unique guild_id index to make
    /// concurrent first contacts collapse into a single row.
    async fn upsert_default(&self, defaults: &GuildSettings) -> Result<bool, StoreError> {
        let inserted = self
            .bounded(
                "upsert_default",
                entity::prelude::GuildSettings::insert(to_active_model(defaults))
                    .on_conflict(
                        OnConflict::column(entity::guild_settings::Column::GuildId)
                            .do_nothing()
                            .to_owned(),
                    )
                    .exec_without_returning(&self.db),
            )
            .await?;

        Ok(inserted > 0)
    }

    /// Writes the full row. Partial-column updates are not used so the stored
    /// row always equals the snapshot that was cached.
    async fn update(&self, settings: &GuildSettings) -> Result<u64, StoreError> {
        let result = self
            .bounded(
                "update",
                entity::prelude::GuildSettings::update_many()
                    .set(to_active_model(settings))
                    .filter(
                        entity::guild_settings::Column::GuildId.eq(settings.guild_id.to_string()),
                    )
                    .exec(&self.db),
            )
            .await?;

        Ok(result.rows_affected)
    }
}
