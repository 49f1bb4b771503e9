//! Guild settings factory for creating test settings rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Join message template used by factory-created rows.
pub const DEFAULT_JOIN_MESSAGE: &str =
    "Welcome {{USER_MENTION}}, to the official {{GUILD_NAME}} guild.";

/// Factory for creating test guild settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let row = GuildSettingsFactory::new(&db)
///     .guild_id("987654321")
///     .prefix("?")
///     .swear_filter(true)
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    prefix: String,
    enable_swear_filter: bool,
    enable_spam_filter: bool,
    mute_role_id: Option<i64>,
    filter_invites: bool,
    enable_join_message: bool,
    custom_join_message: String,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented counter value
    /// - name: `"Guild {id}"`
    /// - prefix: `"db!"`
    /// - every filter and the join message disabled, no mute role
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            prefix: "db!".to_string(),
            enable_swear_filter: false,
            enable_spam_filter: false,
            mute_role_id: None,
            filter_invites: false,
            enable_join_message: false,
            custom_join_message: DEFAULT_JOIN_MESSAGE.to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn swear_filter(mut self, enabled: bool) -> Self {
        self.enable_swear_filter = enabled;
        self
    }

    pub fn spam_filter(mut self, enabled: bool) -> Self {
        self.enable_spam_filter = enabled;
        self
    }

    pub fn mute_role_id(mut self, mute_role_id: Option<i64>) -> Self {
        self.mute_role_id = mute_role_id;
        self
    }

    pub fn filter_invites(mut self, enabled: bool) -> Self {
        self.filter_invites = enabled;
        self
    }

    pub fn join_message(mut self, enabled: bool, template: impl Into<String>) -> Self {
        self.enable_join_message = enabled;
        self.custom_join_message = template.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            prefix: ActiveValue::Set(self.prefix),
            enable_swear_filter: ActiveValue::Set(self.enable_swear_filter),
            enable_spam_filter: ActiveValue::Set(self.enable_spam_filter),
            mute_role_id: ActiveValue::Set(self.mute_role_id),
            filter_invites: ActiveValue::Set(self.filter_invites),
            enable_join_message: ActiveValue::Set(self.enable_join_message),
            custom_join_message: ActiveValue::Set(self.custom_join_message),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild settings row with default values.
///
/// Shorthand for `GuildSettingsFactory::new(db).build().await`.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}
