//! Patron factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for patron rows. Defaults to a global patron with a unique user ID.
pub struct PatronFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: Option<String>,
}

impl<'a> PatronFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            guild_id: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Restricts the patron to a single guild.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    pub async fn build(self) -> Result<entity::patron::Model, DbErr> {
        entity::patron::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
