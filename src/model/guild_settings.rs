use serde::Serialize;

use crate::error::store::StoreError;

/// Join message stored for a guild that has never customised it.
pub const DEFAULT_JOIN_MESSAGE: &str =
    "Welcome {{USER_MENTION}}, to the official {{GUILD_NAME}} guild.";

/// Snapshot of one guild's configuration.
///
/// Values are never edited in place. The `with_*` methods consume a copy and
/// return the changed snapshot, which is then handed to the settings cache as
/// a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildSettings {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Guild display name at the time it was registered or last saved.
    pub name: String,
    /// Custom command prefix. Empty means the global default applies.
    pub prefix: String,
    pub enable_swear_filter: bool,
    pub enable_spam_filter: bool,
    /// Role given to members caught by the spam filter.
    pub mute_role_id: Option<u64>,
    pub filter_invites: bool,
    pub enable_join_message: bool,
    /// Template supporting `{{USER_MENTION}}`, `{{USER_NAME}}` and `{{GUILD_NAME}}`.
    pub custom_join_message: String,
}

impl GuildSettings {
    /// Builds the hard-coded defaults for a guild seen for the first time.
    pub fn new_default(guild_id: u64, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            guild_id,
            name: name.into(),
            prefix: prefix.into(),
            enable_swear_filter: false,
            enable_spam_filter: false,
            mute_role_id: None,
            filter_invites: false,
            enable_join_message: false,
            custom_join_message: DEFAULT_JOIN_MESSAGE.to_string(),
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Parses the string guild_id into u64. Mute role IDs that are zero or
    /// negative are treated as unset.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Successfully converted model
    /// - `Err(StoreError::Corrupt)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, StoreError> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| StoreError::Corrupt {
                key: entity.guild_id.clone(),
                reason: format!("Failed to parse guild_id: {}", e),
            })?;

        let mute_role_id = entity
            .mute_role_id
            .filter(|id| *id > 0)
            .map(|id| id as u64);

        Ok(Self {
            guild_id,
            name: entity.name,
            prefix: entity.prefix,
            enable_swear_filter: entity.enable_swear_filter,
            // The spam filter cannot be active without a mute role.
            enable_spam_filter: entity.enable_spam_filter && mute_role_id.is_some(),
            mute_role_id,
            filter_invites: entity.filter_invites,
            enable_join_message: entity.enable_join_message,
            custom_join_message: entity.custom_join_message,
        })
    }

    /// Returns the custom prefix, or `default` when none is set.
    pub fn effective_prefix<'a>(&'a self, default: &'a str) -> &'a str {
        if self.prefix.trim().is_empty() {
            default
        } else {
            &self.prefix
        }
    }

    /// The spam filter needs somewhere to put offenders.
    pub fn can_enable_spam_filter(&self) -> bool {
        self.mute_role_id.is_some()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_swear_filter(mut self, enabled: bool) -> Self {
        self.enable_swear_filter = enabled;
        self
    }

    pub fn with_spam_filter(mut self, enabled: bool) -> Self {
        self.enable_spam_filter = enabled;
        self
    }

    /// Sets the mute role. Removing it also turns the spam filter off.
    pub fn with_mute_role(mut self, role_id: Option<u64>) -> Self {
        self.mute_role_id = role_id.filter(|id| *id > 0);
        if self.mute_role_id.is_none() {
            self.enable_spam_filter = false;
        }
        self
    }

    pub fn with_filter_invites(mut self, enabled: bool) -> Self {
        self.filter_invites = enabled;
        self
    }

    pub fn with_join_message_enabled(mut self, enabled: bool) -> Self {
        self.enable_join_message = enabled;
        self
    }

    pub fn with_join_message(mut self, template: impl Into<String>) -> Self {
        self.custom_join_message = template.into();
        self
    }

    /// Fills the join message template for a new member.
    pub fn render_join_message(&self, user_id: u64, user_name: &str, guild_name: &str) -> String {
        self.custom_join_message
            .replace("{{USER_MENTION}}", &format!("<@{}>", user_id))
            .replace("{{USER_NAME}}", user_name)
            .replace("{{GUILD_NAME}}", guild_name)
    }
}
