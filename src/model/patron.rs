use crate::error::store::StoreError;

/// A patron entry as loaded from the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatronParam {
    pub user_id: u64,
    /// `None` for patrons supporting the bot everywhere.
    pub guild_id: Option<u64>,
}

impl PatronParam {
    /// Converts an entity model to a param model at the repository boundary.
    pub fn from_entity(entity: entity::patron::Model) -> Result<Self, StoreError> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| StoreError::Corrupt {
                key: entity.user_id.clone(),
                reason: format!("Failed to parse user_id: {}", e),
            })?;

        let guild_id = match entity.guild_id {
            Some(id) => Some(id.parse::<u64>().map_err(|e| StoreError::Corrupt {
                key: entity.user_id.clone(),
                reason: format!("Failed to parse guild_id: {}", e),
            })?),
            None => None,
        };

        Ok(Self { user_id, guild_id })
    }
}
